//! I define [`TripleStore`], an in-memory set of triples with three indexes.
//!
//! Terms are interned in a [`TermIndex`],
//! and each triple is stored as three ids in three ordered sets
//! (subject-predicate-object, predicate-object-subject, object-subject-predicate),
//! so that any combination of bound positions in [`TripleStore::matching`]
//! is served by a prefix range of one of them.
//!
//! Besides the term-level API, the store exposes an id-level API
//! ([`TripleStore::ids_with_predicate`], [`TripleStore::insert_ids`]...)
//! on which entailment rules are written.
use std::collections::BTreeSet;
use std::iter::{empty, once};

use deduce_api::term::{BnodeScope, Iri, MalformedTerm, Term};
use deduce_api::triple::{check_spo, Triple, TripleDefect};

use crate::_dedup::SortedIdsDedup;
use crate::_range_n::RangeN;
use crate::index::TermIndex;

mod _error;
pub use _error::*;

/// The ids of a triple's subject, predicate and object, in that order.
pub type TripleIds = [usize; 3];

/// An in-memory set of triples.
///
/// Blank nodes inserted in a store must belong to its [scope](TripleStore::scope).
/// Cloning a store yields an independent snapshot sharing the same scope,
/// so that the clone and the original can be [compared](TripleStore::difference).
#[derive(Clone, Debug)]
pub struct TripleStore {
    scope: BnodeScope,
    terms: TermIndex,
    spo: BTreeSet<TripleIds>,
    pos: BTreeSet<TripleIds>,
    osp: BTreeSet<TripleIds>,
}

impl TripleStore {
    /// Build an empty store with a fresh blank node scope.
    pub fn new() -> Self {
        Self::with_scope(BnodeScope::fresh())
    }

    /// Build an empty store owning the given blank node scope.
    pub fn with_scope(scope: BnodeScope) -> Self {
        TripleStore {
            scope,
            terms: TermIndex::new(),
            spo: BTreeSet::new(),
            pos: BTreeSet::new(),
            osp: BTreeSet::new(),
        }
    }

    /// Build a store owning `scope`, and containing all the given triples.
    ///
    /// Stops at the first triple that can not be inserted.
    pub fn from_triples<I>(scope: BnodeScope, triples: I) -> Result<Self, InsertError>
    where
        I: IntoIterator<Item = Triple>,
    {
        let mut ret = Self::with_scope(scope);
        for t in triples {
            ret.add(t)?;
        }
        Ok(ret)
    }

    /// The blank node scope owned by this store.
    pub fn scope(&self) -> BnodeScope {
        self.scope
    }

    /// Mint a blank node in the scope of this store.
    pub fn bnode(&self, id: &str) -> Result<Term, MalformedTerm> {
        Ok(self.scope.bnode(id)?.into())
    }

    /// The number of triples in this store.
    pub fn len(&self) -> usize {
        self.spo.len()
    }

    /// Whether this store contains no triple.
    pub fn is_empty(&self) -> bool {
        self.spo.is_empty()
    }

    /// Insert `triple` in this store.
    ///
    /// Return `true` if the store changed, `false` if the triple was already present.
    /// On error, the store is left unchanged.
    pub fn add(&mut self, triple: Triple) -> Result<bool, InsertError> {
        triple.check()?;
        for t in [triple.s(), triple.o()] {
            if let Term::BlankNode(b) = t {
                b.check_scope(self.scope)?;
            }
        }
        let [s, p, o] = triple.as_spo();
        let ids = [s, p, o].map(|t| self.intern(t));
        Ok(self.insert_ids(ids))
    }

    /// Insert the triple `(s, p, o)` in this store.
    ///
    /// See [`TripleStore::add`].
    pub fn insert(&mut self, s: Term, p: Term, o: Term) -> Result<bool, InsertError> {
        self.add(Triple::new(s, p, o))
    }

    /// Whether this store contains `triple`.
    pub fn contains(&self, triple: &Triple) -> bool {
        let [s, p, o] = triple.as_spo();
        match (self.term_id(s), self.term_id(p), self.term_id(o)) {
            (Some(si), Some(pi), Some(oi)) => self.contains_ids([si, pi, oi]),
            _ => false,
        }
    }

    /// Iterate over all triples in this store.
    ///
    /// The order is deterministic for a given sequence of insertions,
    /// but depends on it; see [`TripleStore::sorted_triples`].
    pub fn triples(&self) -> impl Iterator<Item = [&Term; 3]> + '_ {
        self.spo.iter().map(|ids| self.get_triple(*ids))
    }

    /// All triples in this store, sorted by subject, then predicate, then object.
    ///
    /// Two stores containing the same triples return the same vector,
    /// regardless of the order in which their triples were inserted.
    pub fn sorted_triples(&self) -> Vec<Triple> {
        let mut ret: Vec<Triple> = self
            .triples()
            .map(|[s, p, o]| Triple::new(s.clone(), p.clone(), o.clone()))
            .collect();
        ret.sort_unstable();
        ret
    }

    /// Iterate over all triples matching the given pattern,
    /// where `None` acts as a wildcard.
    pub fn matching<'s>(
        &'s self,
        s: Option<&Term>,
        p: Option<&Term>,
        o: Option<&Term>,
    ) -> Box<dyn Iterator<Item = [&'s Term; 3]> + 's> {
        // a bound term that was never interned matches nothing
        let lookup = |t: Option<&Term>| match t {
            None => Ok(None),
            Some(t) => self.term_id(t).map(Some).ok_or(()),
        };
        let (Ok(si), Ok(pi), Ok(oi)) = (lookup(s), lookup(p), lookup(o)) else {
            return Box::new(empty());
        };
        match (si, pi, oi) {
            (None, None, None) => Box::new(self.triples()),
            (Some(si), None, None) => Box::new(
                self.spo
                    .range1(si)
                    .map(|ids| self.get_triple(*ids)),
            ),
            (None, Some(pi), None) => Box::new(
                self.pos
                    .range1(pi)
                    .map(|[p, o, s]| self.get_triple([*s, *p, *o])),
            ),
            (None, None, Some(oi)) => Box::new(
                self.osp
                    .range1(oi)
                    .map(|[o, s, p]| self.get_triple([*s, *p, *o])),
            ),
            (Some(si), Some(pi), None) => Box::new(
                self.spo
                    .range2(si, pi)
                    .map(|ids| self.get_triple(*ids)),
            ),
            (None, Some(pi), Some(oi)) => Box::new(
                self.pos
                    .range2(pi, oi)
                    .map(|[p, o, s]| self.get_triple([*s, *p, *o])),
            ),
            (Some(si), None, Some(oi)) => Box::new(
                self.osp
                    .range2(oi, si)
                    .map(|[o, s, p]| self.get_triple([*s, *p, *o])),
            ),
            (Some(si), Some(pi), Some(oi)) => {
                if self.contains_ids([si, pi, oi]) {
                    Box::new(once(self.get_triple([si, pi, oi])))
                } else {
                    Box::new(empty())
                }
            }
        }
    }

    /// Build a new store containing the triples of `self` that are not in `other`.
    ///
    /// Triples are compared structurally; neither store is modified.
    /// The result shares the scope of `self`.
    pub fn difference(&self, other: &TripleStore) -> TripleStore {
        let mut ret = TripleStore::with_scope(self.scope);
        for [s, p, o] in self.triples() {
            let in_other = match (other.term_id(s), other.term_id(p), other.term_id(o)) {
                (Some(si), Some(pi), Some(oi)) => other.contains_ids([si, pi, oi]),
                _ => false,
            };
            if !in_other {
                let ids = [s, p, o].map(|t| ret.intern(t));
                ret.insert_ids(ids);
            }
        }
        ret
    }

    //
    // id-level API
    //

    /// The id of `term` in this store, if it has been interned.
    pub fn term_id(&self, term: &Term) -> Option<usize> {
        self.terms.get_index(term)
    }

    /// The id of `iri` in this store, if it has been interned.
    pub fn iri_id(&self, iri: &Iri) -> Option<usize> {
        self.terms.get_index(&Term::Iri(iri.clone()))
    }

    /// The id of `iri` in this store, interning it if necessary.
    ///
    /// Interning a term does not change the set of triples.
    pub fn intern_iri(&mut self, iri: &Iri) -> usize {
        self.terms.ensure_index(&Term::Iri(iri.clone()))
    }

    /// The term with the given id.
    ///
    /// # Precondition
    /// `id` must have been returned by this store, otherwise this method panics.
    pub fn term(&self, id: usize) -> &Term {
        self.terms.get_term(id)
    }

    /// Iterate over all interned terms with their ids.
    pub fn terms(&self) -> impl Iterator<Item = (usize, &Term)> + Send + '_ {
        self.terms.iter()
    }

    /// Iterate over the ids of all triples.
    pub fn ids(&self) -> impl Iterator<Item = TripleIds> + Send + '_ {
        self.spo.iter().copied()
    }

    /// Iterate over the ids of all triples with subject `s`.
    pub fn ids_with_subject(&self, s: usize) -> impl Iterator<Item = TripleIds> + Send + '_ {
        self.spo.range1(s).copied()
    }

    /// Iterate over the ids of all triples with predicate `p`.
    pub fn ids_with_predicate(&self, p: usize) -> impl Iterator<Item = TripleIds> + Send + '_ {
        self.pos.range1(p).map(|[p, o, s]| [*s, *p, *o])
    }

    /// Iterate over the ids of all triples with predicate `p` and object `o`.
    pub fn ids_with_predicate_object(
        &self,
        p: usize,
        o: usize,
    ) -> impl Iterator<Item = TripleIds> + Send + '_ {
        self.pos.range2(p, o).map(|[p, o, s]| [*s, *p, *o])
    }

    /// Iterate over the ids of all triples with object `o`.
    pub fn ids_with_object(&self, o: usize) -> impl Iterator<Item = TripleIds> + Send + '_ {
        self.osp.range1(o).map(|[o, s, p]| [*s, *p, *o])
    }

    /// Iterate over the ids of all terms used as predicate, without duplicates.
    pub fn predicate_ids(&self) -> impl Iterator<Item = usize> + Send + '_ {
        self.pos.iter().map(|pos| pos[0]).dedup_sorted()
    }

    /// Whether this store contains the triple with the given ids.
    pub fn contains_ids(&self, ids: TripleIds) -> bool {
        self.spo.contains(&ids)
    }

    /// Check that the triple with the given ids would comply with the RDF data model.
    ///
    /// # Precondition
    /// All ids must have been returned by this store, otherwise this method panics.
    pub fn check_ids(&self, [s, p, o]: TripleIds) -> Result<(), TripleDefect> {
        check_spo(self.term(s), self.term(p), self.term(o))
    }

    /// Insert the triple with the given ids.
    /// Return `true` if the store changed.
    ///
    /// # Precondition
    /// All ids must have been returned by this store,
    /// and must pass [`TripleStore::check_ids`].
    /// This is only checked in debug builds.
    pub fn insert_ids(&mut self, [s, p, o]: TripleIds) -> bool {
        debug_assert!(self.check_ids([s, p, o]).is_ok());
        self.spo.insert([s, p, o]) && {
            self.pos.insert([p, o, s]);
            self.osp.insert([o, s, p]);
            true
        }
    }

    /// Intern `term`, along with its datatype if it is a typed literal,
    /// so that the datatype of every stored literal has an id.
    fn intern(&mut self, term: &Term) -> usize {
        if let Some(dt) = term.as_literal().and_then(|lit| lit.datatype()) {
            self.intern_iri(dt);
        }
        self.terms.ensure_index(term)
    }

    fn get_triple(&self, ids: TripleIds) -> [&Term; 3] {
        ids.map(|i| self.terms.get_term(i))
    }
}

impl Default for TripleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test;
