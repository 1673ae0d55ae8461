//! I provide functions to isolate the triples added by a closure computation.
//!
//! The result is only meaningful if `original` is a snapshot of the store
//! taken right before it was expanded (typically with [`Clone`]),
//! so that both stores share the same blank node scope.
use deduce_inmem::TripleStore;

use crate::engine::{ClosureEngine, ClosureReport};
use crate::ruleset::RuleSet;

/// Return a new store containing exactly the triples of `closed` that are not in `original`.
///
/// Neither store is modified.
pub fn difference(closed: &TripleStore, original: &TripleStore) -> TripleStore {
    closed.difference(original)
}

/// Count the triples of `closed` that are not in `original`,
/// without building a new store.
pub fn entailed_count(closed: &TripleStore, original: &TripleStore) -> usize {
    closed
        .triples()
        .filter(|[s, p, o]| original.matching(Some(*s), Some(*p), Some(*o)).next().is_none())
        .count()
}

/// Expand `store` in place with `engine`, and return the report of the closure
/// together with a store containing only the entailed triples.
pub fn expand_with_diff<R: RuleSet>(
    engine: &ClosureEngine<R>,
    store: &mut TripleStore,
) -> (ClosureReport, TripleStore) {
    let original = store.clone();
    let report = engine.expand(store);
    let entailed = difference(store, &original);
    log::debug!("{} entailed triples", entailed.len());
    (report, entailed)
}
