//! This crate is part of [Deduce],
//! a toolkit for computing the [RDFS] deductive closure of RDF graphs.
//!
//! It defines the data model shared by the other crates:
//! * [terms](term) (IRIs, blank nodes and literals),
//! * [triples](triple),
//! * the standard [namespaces](ns) used by the entailment rules.
//!
//! [Deduce]: https://docs.rs/deduce/latest/deduce/
//! [RDFS]: https://www.w3.org/TR/rdf11-mt/#rdfs-interpretations
#![deny(missing_docs)]

pub mod ns;
pub mod term;
pub mod triple;

/// Re-export the most commonly used items.
pub mod prelude {
    pub use crate::ns::{rdf, rdfs, xsd, NsTerm};
    pub use crate::term::{
        BlankNode, BlankNodeScopeViolation, BnodeScope, Iri, LanguageTag, Literal, MalformedTerm,
        Term, TermKind,
    };
    pub use crate::triple::{MalformedTriple, Triple, TripleDefect};
}
