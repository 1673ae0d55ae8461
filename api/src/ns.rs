//! Standard and custom namespaces.
//!
//! This module provides:
//! * the [`Namespace`] type for defining custom dynamic namespace;
//! * the [`namespace`] macro, for defning custom static namespaces;
//! * modules corresponding to the namespaces used by RDF(S) entailment
//!   (generated via the [`namespace`] macro).
//!
//! # Example use
//! ```
//! use deduce_api::ns::{Namespace, rdf, rdfs};
//! use deduce_api::triple::Triple;
//!
//! let schema = Namespace::new("http://schema.org/").unwrap();
//! let s_name = schema.get("name").unwrap();
//!
//! let t = Triple::new(s_name.into(), rdf::type_.term(), rdf::Property.term());
//! assert_eq!(t.p(), &rdf::type_.term());
//! ```
use std::fmt;

use crate::term::{InvalidIri, Iri, Term};

#[macro_use]
mod _macro;
pub use _macro::*;
mod _namespace;
pub use _namespace::*;
mod _term;
pub use _term::*;

/// The standard `rdf:` namespace.
///
/// NB: since `type` is a reserved keyword in Rust,
/// the term `rdf:type` spells `rdf::type_` (with a trailing underscore).
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        // classes
        Alt,
        Bag,
        List,
        Property,
        Seq,
        Statement,
        // datatypes
        HTML,
        langString,
        XMLLiteral,
        // properties
        first,
        object,
        predicate,
        rest,
        subject,
        value,
        // first container membership property
        _1,
        // individuals
        nil;
        // 'type' is a Rust keyword, so we use 'type_' instead
        type_, "type"
    );
}

/// The standard `rdfs:` namespace.
pub mod rdfs {
    namespace!(
        "http://www.w3.org/2000/01/rdf-schema#",
        // types
        Class,
        Container,
        ContainerMembershipProperty,
        Datatype,
        Literal,
        Resource,
        // semantic properties
        domain,
        range,
        subClassOf,
        subPropertyOf,
        // documentation properties
        comment,
        isDefinedBy,
        label,
        member,
        seeAlso
    );
}

/// The standard `xsd:` namespace (only the datatypes commonly found in RDF data).
#[rustfmt::skip]
pub mod xsd {
    namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        anyURI,
        boolean,
        date,
        dateTime,
        decimal,
            integer,
                int,
                long,
                nonNegativeInteger,
        double,
        float,
        string
    );
}
