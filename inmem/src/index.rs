//! A [`TermIndex`] is a bidirectional association of [terms](`Term`) with short numeric indices.
//!
//! Indices are allocated in insertion order, starting at 0,
//! and are never reused or invalidated.
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use deduce_api::term::Term;

/// A bidirectional association of [terms](`Term`) with `usize` indices.
#[derive(Clone, Debug, Default)]
pub struct TermIndex {
    t2i: HashMap<Term, usize>,
    i2t: Vec<Term>,
}

impl TermIndex {
    /// Build an empty term index.
    pub fn new() -> Self {
        TermIndex {
            t2i: HashMap::new(),
            i2t: vec![],
        }
    }

    /// The number of terms in this index.
    pub fn len(&self) -> usize {
        self.i2t.len()
    }

    /// Whether this index contains no term.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the index corresponding to term `t`, if it exists.
    pub fn get_index(&self, t: &Term) -> Option<usize> {
        self.t2i.get(t).copied()
    }

    /// Get the index corresponding to term `t`, adding it in the term-index if necessary.
    pub fn ensure_index(&mut self, t: &Term) -> usize {
        match self.t2i.entry(t.clone()) {
            Entry::Vacant(e) => {
                let i = self.i2t.len();
                self.i2t.push(t.clone());
                e.insert(i);
                i
            }
            Entry::Occupied(e) => *e.get(),
        }
    }

    /// Get the term corresponding to index `i`.
    ///
    /// # Precondition
    /// `i` must have been returned previously by [`get_index`](TermIndex::get_index)
    /// or [`ensure_index`](TermIndex::ensure_index),
    /// otherwise this method panics.
    pub fn get_term(&self, i: usize) -> &Term {
        &self.i2t[i]
    }

    /// Iterate over all (index, term) pairs, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Term)> + Send + '_ {
        self.i2t.iter().enumerate()
    }
}
