//! An RDF triple expresses a single fact.
//! Its formed of three terms called *subject*, *predicate* and *object*.
//!
//! You can think of a triple as a sentence of the form
//! "subject verb complement"
//! (although the *predicate* is often better expressed as a relationship than a verb).
//!
//! A [`Triple`] can be built from any three [terms](Term);
//! whether it complies with the RDF data model
//! (subject is not a literal, predicate is an IRI)
//! is checked by [`Triple::check`], which triple stores call on insertion.
use std::fmt;

use thiserror::Error;

use crate::term::{Term, TermKind};

/// An RDF triple.
///
/// Triples are compared and ordered by subject, then predicate, then object.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple([Term; 3]);

impl Triple {
    /// Build a triple from its three components.
    pub fn new(s: Term, p: Term, o: Term) -> Self {
        Triple([s, p, o])
    }

    /// The subject of this triple.
    pub fn s(&self) -> &Term {
        &self.0[0]
    }

    /// The predicate of this triple.
    pub fn p(&self) -> &Term {
        &self.0[1]
    }

    /// The object of this triple.
    pub fn o(&self) -> &Term {
        &self.0[2]
    }

    /// The three components of this triple, as an array.
    pub fn as_spo(&self) -> &[Term; 3] {
        &self.0
    }

    /// Consume this triple into an array of its three components.
    pub fn into_spo(self) -> [Term; 3] {
        self.0
    }

    /// Check that this triple complies with the RDF data model.
    pub fn check(&self) -> Result<(), MalformedTriple> {
        check_spo(self.s(), self.p(), self.o()).map_err(|defect| MalformedTriple {
            triple: self.clone(),
            defect,
        })
    }
}

/// Check that `s`, `p` and `o` would form a triple complying with the RDF data model.
///
/// The object position accepts any term.
pub fn check_spo(s: &Term, p: &Term, _o: &Term) -> Result<(), TripleDefect> {
    if s.is_literal() {
        return Err(TripleDefect::LiteralSubject);
    }
    if !p.is_iri() {
        return Err(TripleDefect::NonIriPredicate(p.kind()));
    }
    Ok(())
}

impl From<[Term; 3]> for Triple {
    fn from(value: [Term; 3]) -> Self {
        Triple(value)
    }
}

impl From<Triple> for [Term; 3] {
    fn from(value: Triple) -> Self {
        value.0
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.s(), self.p(), self.o())
    }
}

/// The reason why a [`Triple`] does not comply with the RDF data model.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TripleDefect {
    /// The subject is a literal
    #[error("subject is a literal")]
    LiteralSubject,
    /// The predicate is not an IRI
    #[error("predicate is a {0}, not an IRI")]
    NonIriPredicate(TermKind),
}

/// This error is raised when a triple that does not comply with the RDF data model
/// is inserted in a store.
#[derive(Clone, Debug, Error)]
#[error("Malformed triple {triple}: {defect}")]
pub struct MalformedTriple {
    /// The rejected triple
    pub triple: Triple,
    /// Why it was rejected
    pub defect: TripleDefect,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ns::{rdf, rdfs};
    use crate::term::{BnodeScope, Literal};
    use test_case::test_case;

    fn ex(suffix: &str) -> Term {
        Term::iri(&format!("http://example.org/{suffix}")).unwrap()
    }

    #[test]
    fn accessors() {
        let t = Triple::new(ex("s"), ex("p"), ex("o"));
        assert_eq!(t.s(), &ex("s"));
        assert_eq!(t.p(), &ex("p"));
        assert_eq!(t.o(), &ex("o"));
        assert_eq!(t.clone().into_spo(), [ex("s"), ex("p"), ex("o")]);
        assert_eq!(Triple::from([ex("s"), ex("p"), ex("o")]), t);
    }

    #[test]
    fn well_formed() {
        let scope = BnodeScope::fresh();
        let b = Term::BlankNode(scope.bnode("b").unwrap());
        assert!(Triple::new(ex("s"), ex("p"), ex("o")).check().is_ok());
        assert!(Triple::new(b.clone(), ex("p"), b.clone()).check().is_ok());
        assert!(Triple::new(ex("s"), ex("p"), Term::plain("o")).check().is_ok());
    }

    #[test_case(Term::plain("s"), ex("p"), TripleDefect::LiteralSubject; "literal subject")]
    #[test_case(ex("s"), Term::plain("p"), TripleDefect::NonIriPredicate(TermKind::Literal); "literal predicate")]
    #[test_case(ex("s"), Term::BlankNode(BnodeScope::fresh().bnode("p").unwrap()), TripleDefect::NonIriPredicate(TermKind::BlankNode); "bnode predicate")]
    fn malformed(s: Term, p: Term, expected: TripleDefect) {
        let t = Triple::new(s, p, ex("o"));
        let err = t.check().unwrap_err();
        assert_eq!(err.defect, expected);
        assert_eq!(err.triple, t);
    }

    #[test]
    fn display() {
        let t = Triple::new(
            rdfs::Class.term(),
            rdf::type_.term(),
            Term::Literal(Literal::lang("class", "en").unwrap()),
        );
        assert_eq!(
            t.to_string(),
            r#"<http://www.w3.org/2000/01/rdf-schema#Class> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> "class"@en ."#
        );
    }

    #[test]
    fn error_message_names_triple_and_reason() {
        let err = Triple::new(Term::plain("s"), ex("p"), ex("o"))
            .check()
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(r#""s" <http://example.org/p> <http://example.org/o> ."#), "{msg}");
        assert!(msg.contains("subject is a literal"), "{msg}");
    }
}
