//! This crate is part of [Deduce],
//! a toolkit for computing the [RDFS] deductive closure of RDF graphs.
//!
//! It provides a forward-chaining [`ClosureEngine`]
//! for Simple, RDF and RDFS entailment (see [`ruleset`]),
//! operating in place on a [`TripleStore`](deduce_inmem::TripleStore),
//! and functions to isolate the entailed triples (see [`diff`]).
//!
//! # Example
//! ```
//! use deduce_api::ns::{rdf, rdfs};
//! use deduce_api::term::Term;
//! use deduce_inmem::TripleStore;
//! use deduce_reasoner::{diff, ClosureEngine, ClosureState};
//!
//! let ex = |s: &str| Term::iri(&format!("http://example.org/{s}")).unwrap();
//! let mut store = TripleStore::new();
//! store.insert(ex("Manager"), rdfs::subClassOf.term(), ex("Person")).unwrap();
//! store.insert(ex("alice"), rdf::type_.term(), ex("Manager")).unwrap();
//!
//! let engine: ClosureEngine = ClosureEngine::new();
//! let (report, entailed) = diff::expand_with_diff(&engine, &mut store);
//! assert_eq!(report.state, ClosureState::Fixpoint);
//! assert!(entailed.contains(&[ex("alice"), rdf::type_.term(), ex("Person")].into()));
//! ```
//!
//! [Deduce]: https://docs.rs/deduce/latest/deduce/
//! [RDFS]: https://www.w3.org/TR/rdf11-mt/#rdfs-interpretations
#![deny(missing_docs)]

use deduce_inmem::TripleStore;

pub mod diff;
pub mod engine;
pub mod ruleset;
pub mod vocab;

pub use engine::{ClosureEngine, ClosureOptions, ClosureReport, ClosureState};

/// Saturate `store` under [RDFS entailment](ruleset::Rdfs), with default options.
pub fn expand(store: &mut TripleStore) -> ClosureReport {
    ClosureEngine::<ruleset::Rdfs>::new().expand(store)
}


#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
