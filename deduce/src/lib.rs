//! This crate aims to provide a toolkit
//! for computing the [RDFS] deductive closure of [RDF] graphs in Rust.
//!
//! Each piece of knowledge in RDF (a *statement*)
//! is represented by a [triple], made of three [term]s.
//! Given a set of asserted triples, stored in a [`TripleStore`](inmem::TripleStore),
//! the [`ClosureEngine`](reasoner::ClosureEngine) derives every triple
//! entailed by the RDFS entailment rules and axioms,
//! until a fixpoint is reached.
//!
//! This crate re-exports the crates composing the toolkit:
//! * [`api`]: terms, triples and standard namespaces,
//! * [`inmem`]: the indexed in-memory triple store,
//! * [`reasoner`]: rule sets, closure engine and graph diff.
//!
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
//! [RDFS]: https://www.w3.org/TR/rdf11-mt/#rdfs-interpretations
//! [triple]: api::triple
//! [term]: api::term
//!
//! # Getting Started
//!
//! ```
//! use deduce::api::ns::{rdf, rdfs};
//! use deduce::api::term::Term;
//! use deduce::inmem::TripleStore;
//! use deduce::reasoner::{diff, ClosureEngine};
//!
//! let ex = |s: &str| Term::iri(&format!("http://example.org/{s}")).unwrap();
//! let mut store = TripleStore::new();
//! store.insert(ex("worksAt"), rdfs::domain.term(), ex("Person")).unwrap();
//! store.insert(ex("alice"), ex("worksAt"), ex("acme")).unwrap();
//!
//! let engine: ClosureEngine = ClosureEngine::new();
//! let (report, entailed) = diff::expand_with_diff(&engine, &mut store);
//! println!("{report}");
//! for t in entailed.sorted_triples() {
//!     println!("{t}");
//! }
//! assert!(store.contains(&[ex("alice"), rdf::type_.term(), ex("Person")].into()));
//! ```
#![deny(missing_docs)]

pub use deduce_api as api;
pub use deduce_inmem as inmem;
pub use deduce_reasoner as reasoner;
