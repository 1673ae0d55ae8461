//! This crate is part of [Deduce],
//! a toolkit for computing the [RDFS] deductive closure of RDF graphs.
//!
//! It provides [`TripleStore`], an in-memory set of triples
//! indexed for the pattern queries issued by entailment rules.
//!
//! [Deduce]: https://docs.rs/deduce/latest/deduce/
//! [RDFS]: https://www.w3.org/TR/rdf11-mt/#rdfs-interpretations
#![deny(missing_docs)]

mod _dedup;
mod _range_n;

pub mod index;
pub mod store;

pub use store::{InsertError, TripleIds, TripleStore};
