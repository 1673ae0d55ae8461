//! I define the [`Literal`] type.
use std::sync::Arc;

use super::{Iri, LanguageTag, MalformedTerm};
use crate::ns::rdf;

/// An RDF literal: a lexical form,
/// optionally qualified by either a datatype IRI or a language tag (never both).
///
/// Two literals are equal iff their lexical forms, datatypes and language tags are equal.
/// Literals are ordered by lexical form first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    lex: Arc<str>,
    kind: LiteralKind,
}

/// The qualifier of a [`Literal`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LiteralKind {
    /// Neither datatype nor language tag
    Plain,
    /// An explicit datatype
    Typed(Iri),
    /// A language tag
    Lang(LanguageTag),
}

impl Literal {
    /// Build a literal from its optional datatype and language tag.
    ///
    /// Fails with [`MalformedTerm`] if both are given,
    /// if the language tag is invalid,
    /// or if the datatype is `rdf:langString` (which requires a language tag).
    pub fn new(lex: &str, datatype: Option<Iri>, tag: Option<&str>) -> Result<Self, MalformedTerm> {
        let kind = match (datatype, tag) {
            (None, None) => LiteralKind::Plain,
            (Some(dt), None) => return Self::typed(lex, dt),
            (None, Some(tag)) => LiteralKind::Lang(LanguageTag::new(tag)?),
            (Some(dt), Some(tag)) => {
                return Err(MalformedTerm::DatatypeAndLanguage {
                    lex: lex.to_string(),
                    datatype: dt.as_str().to_string(),
                    tag: tag.to_string(),
                })
            }
        };
        Ok(Literal {
            lex: Arc::from(lex),
            kind,
        })
    }

    /// Build a simple literal.
    pub fn plain(lex: &str) -> Self {
        Literal {
            lex: Arc::from(lex),
            kind: LiteralKind::Plain,
        }
    }

    /// Build a datatyped literal.
    ///
    /// Fails with [`MalformedTerm::LangStringWithoutLanguage`] if `datatype` is `rdf:langString`;
    /// use [`Literal::lang`] instead.
    pub fn typed(lex: &str, datatype: Iri) -> Result<Self, MalformedTerm> {
        if rdf::langString == datatype {
            return Err(MalformedTerm::LangStringWithoutLanguage {
                lex: lex.to_string(),
            });
        }
        Ok(Literal {
            lex: Arc::from(lex),
            kind: LiteralKind::Typed(datatype),
        })
    }

    /// Build a language-tagged string.
    pub fn lang(lex: &str, tag: &str) -> Result<Self, MalformedTerm> {
        Ok(Literal {
            lex: Arc::from(lex),
            kind: LiteralKind::Lang(LanguageTag::new(tag)?),
        })
    }

    /// The lexical form of this literal.
    pub fn lexical_form(&self) -> &str {
        &self.lex
    }

    /// The qualifier of this literal.
    pub fn kind(&self) -> &LiteralKind {
        &self.kind
    }

    /// The explicit datatype of this literal, if any.
    pub fn datatype(&self) -> Option<&Iri> {
        match &self.kind {
            LiteralKind::Typed(dt) => Some(dt),
            _ => None,
        }
    }

    /// The language tag of this literal, if any.
    pub fn language_tag(&self) -> Option<&LanguageTag> {
        match &self.kind {
            LiteralKind::Lang(tag) => Some(tag),
            _ => None,
        }
    }
}
