//! An RDF term is the atomic building block of [triples](crate::triple::Triple).
//!
//! A [`Term`] is either
//! * an [`Iri`], identifying a resource globally,
//! * a [`BlankNode`], identifying a resource within a single store, or
//! * a [`Literal`], representing a value.
//!
//! Terms are immutable values. Cloning them is cheap,
//! as their textual payloads are reference-counted.
//!
//! # Ordering
//!
//! [`Term`] implements a total order, used to enumerate triples deterministically.
//! Terms of different kinds are ordered IRI < blank node < literal.
//!
//! # Blank node scopes
//!
//! Every [`BlankNode`] carries, besides its local identifier,
//! the [`BnodeScope`] of the store that minted it.
//! Two blank nodes with the same identifier but different scopes are *not* equal:
//! `_:b1` parsed into one store and `_:b1` parsed into another one
//! denote unrelated resources.
use std::fmt;

use thiserror::Error;

mod _display;
mod bnode;
pub use bnode::*;
mod iri;
pub use iri::*;
mod language_tag;
pub use language_tag::*;
mod literal;
pub use literal::*;

/// An RDF term.
///
/// The declaration order of the variants defines the cross-kind ordering
/// (IRI < blank node < literal).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// An [IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri(Iri),
    /// A [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode(BlankNode),
    /// A [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal(Literal),
}

/// The different kinds of [`Term`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TermKind {
    /// See [`Term::Iri`]
    Iri,
    /// See [`Term::BlankNode`]
    BlankNode,
    /// See [`Term::Literal`]
    Literal,
}

impl Term {
    /// Build an IRI term, checking that `iri` is a valid absolute IRI.
    pub fn iri(iri: &str) -> Result<Self, MalformedTerm> {
        Ok(Term::Iri(Iri::new(iri)?))
    }

    /// Build a simple literal term (no datatype, no language tag).
    pub fn plain(lex: &str) -> Self {
        Term::Literal(Literal::plain(lex))
    }

    /// The kind of this term.
    pub fn kind(&self) -> TermKind {
        match self {
            Term::Iri(_) => TermKind::Iri,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Literal(_) => TermKind::Literal,
        }
    }

    /// Whether this term is an IRI.
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Whether this term is a blank node.
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Whether this term is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Return the inner [`Iri`] if this term is an IRI.
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Return the inner [`BlankNode`] if this term is a blank node.
    pub fn as_blank_node(&self) -> Option<&BlankNode> {
        match self {
            Term::BlankNode(bn) => Some(bn),
            _ => None,
        }
    }

    /// Return the inner [`Literal`] if this term is a literal.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

impl From<Iri> for Term {
    fn from(value: Iri) -> Self {
        Term::Iri(value)
    }
}

impl From<BlankNode> for Term {
    fn from(value: BlankNode) -> Self {
        Term::BlankNode(value)
    }
}

impl From<Literal> for Term {
    fn from(value: Literal) -> Self {
        Term::Literal(value)
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TermKind::Iri => "IRI",
            TermKind::BlankNode => "blank node",
            TermKind::Literal => "literal",
        })
    }
}

/// This error is raised when trying to build a structurally invalid [`Term`].
#[derive(Clone, Debug, Error)]
pub enum MalformedTerm {
    /// The IRI is not a valid absolute IRI
    #[error(transparent)]
    Iri(#[from] InvalidIri),
    /// The blank node identifier is not valid
    #[error(transparent)]
    BnodeId(#[from] InvalidBnodeId),
    /// The language tag is not valid
    #[error(transparent)]
    LanguageTag(#[from] InvalidLanguageTag),
    /// A literal was given both a datatype and a language tag
    #[error("Literal {lex:?} can not have both datatype <{datatype}> and language tag @{tag}")]
    DatatypeAndLanguage {
        /// The lexical form of the rejected literal
        lex: String,
        /// The datatype given to the rejected literal
        datatype: String,
        /// The language tag given to the rejected literal
        tag: String,
    },
    /// A literal was given the datatype `rdf:langString` without a language tag
    #[error("Literal {lex:?} can not have datatype rdf:langString without a language tag")]
    LangStringWithoutLanguage {
        /// The lexical form of the rejected literal
        lex: String,
    },
}

#[cfg(test)]
mod test;
