use std::sync::LazyLock;

use deduce_api::ns::rdf;
use deduce_api::term::Term;
use deduce_inmem::{TripleIds, TripleStore};
use rayon::iter::{ParallelBridge, ParallelExtend, ParallelIterator};
use regex::Regex;

use super::{Axiom, Rule, RuleSet};
use crate::vocab::Vocab;

/// A [`RuleSet`] for [RDF semantics](https://www.w3.org/TR/rdf11-mt/#rdf-interpretations)
///
/// # Limitations
///
/// * `rdf:_2`, `rdf:_3`... should all have `rdf:type` `rdf:Property`;
///   only those present in the store will effectively have it.
/// * literals with a recognized datatype should be instances of that datatype,
///   but this can only be expressed in generalized RDF,
///   so no such triple is inferred.
pub struct Rdf;

impl RuleSet for Rdf {
    fn axioms() -> impl Iterator<Item = &'static Axiom> {
        RDF_AXIOMS.iter()
    }
    fn rules() -> &'static [Rule] {
        &RDF_RULES
    }
}

/// https://www.w3.org/TR/rdf11-mt/#rdf-interpretations (RDF axiomatic triples)
pub(crate) static RDF_AXIOMS: [Axiom; 9] = [
    [&rdf::type_, &rdf::type_, &rdf::Property],
    [&rdf::subject, &rdf::type_, &rdf::Property],
    [&rdf::predicate, &rdf::type_, &rdf::Property],
    [&rdf::object, &rdf::type_, &rdf::Property],
    [&rdf::first, &rdf::type_, &rdf::Property],
    [&rdf::rest, &rdf::type_, &rdf::Property],
    [&rdf::value, &rdf::type_, &rdf::Property],
    [&rdf::_1, &rdf::type_, &rdf::Property],
    [&rdf::nil, &rdf::type_, &rdf::List],
];

static RDF_RULES: [Rule; 2] = [
    Rule {
        name: "rdf1",
        apply: rdf1,
    },
    Rule {
        name: "rdf_membership",
        apply: rdf_membership,
    },
];

/// https://www.w3.org/TR/rdf11-mt/#patterns-of-rdf-entailment (rdfD2)
pub(crate) fn rdf1(store: &TripleStore, v: &Vocab, buf: &mut Vec<TripleIds>) {
    let (type_, property) = (v.rdf_type, v.rdf_property);
    buf.par_extend(
        store
            .predicate_ids()
            .par_bridge()
            .map(move |p| [p, type_, property]),
    );
}

/// every container membership property used in the store is a property
pub(crate) fn rdf_membership(store: &TripleStore, v: &Vocab, buf: &mut Vec<TripleIds>) {
    let (type_, property) = (v.rdf_type, v.rdf_property);
    buf.par_extend(membership_properties(store).map(move |i| [i, type_, property]));
}

/// The ids of all `rdf:_n` IRIs in `store`.
pub(crate) fn membership_properties(store: &TripleStore) -> impl ParallelIterator<Item = usize> + '_ {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(&format!("^{}_[1-9][0-9]*$", regex::escape(rdf::PREFIX))).unwrap()
    });
    store.terms().par_bridge().filter_map(|(i, t)| match t {
        Term::Iri(iri) if RE.is_match(iri.as_str()) => Some(i),
        _ => None,
    })
}
