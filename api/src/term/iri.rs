//! I define the [`Iri`] type,
//! which guarantees that the underlying `str` is a valid absolute IRI.
use std::borrow::Borrow;
use std::sync::Arc;

use thiserror::Error;

/// This wrapper guarantees that the underlying `str`
/// is a valid absolute IRI according to [RFC3987](https://www.ietf.org/rfc/rfc3987.txt).
///
/// Equality and ordering are those of the underlying string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(Arc<str>);

impl Iri {
    /// Build a new [`Iri`],
    /// returning an error if `iri` is not a valid absolute IRI.
    pub fn new(iri: &str) -> Result<Self, InvalidIri> {
        match oxiri::Iri::parse(iri) {
            Ok(_) => Ok(Iri(Arc::from(iri))),
            Err(err) => Err(InvalidIri(iri.to_string(), err.to_string())),
        }
    }

    /// Build a new [`Iri`] without checking that `iri` is valid.
    ///
    /// Callers must ensure that `iri` is a valid absolute IRI,
    /// otherwise downstream consumers of this term may misbehave.
    pub fn new_unchecked(iri: &str) -> Self {
        debug_assert!(oxiri::Iri::parse(iri).is_ok(), "{iri}");
        Iri(Arc::from(iri))
    }

    /// Gets a reference to the underlying `str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Iri {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Iri {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Iri {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// This error is raised when trying to build an invalid IRI.
#[derive(Clone, Debug, Error)]
#[error("The given IRI '{0}' is not valid according to RFC3987: {1}")]
pub struct InvalidIri(pub String, pub String);

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("http://example.org/"; "http")]
    #[test_case("http://example.org/foo#bar"; "with fragment")]
    #[test_case("urn:isbn:0451450523"; "urn")]
    #[test_case("http://www.w3.org/1999/02/22-rdf-syntax-ns#_1"; "membership property")]
    #[test_case("http://example.org/caf\u{e9}"; "non ascii")]
    fn valid(txt: &str) {
        let iri = Iri::new(txt).unwrap();
        assert_eq!(iri.as_str(), txt);
    }

    #[test_case(""; "empty")]
    #[test_case("foo"; "relative")]
    #[test_case("../foo"; "relative path")]
    #[test_case("http://example.org/a b"; "space")]
    #[test_case("http://example.org/<a>"; "angle brackets")]
    fn invalid(txt: &str) {
        assert!(Iri::new(txt).is_err());
    }

    #[test]
    fn equality_is_string_equality() {
        let a = Iri::new("http://example.org/a").unwrap();
        let a2 = Iri::new("http://example.org/a").unwrap();
        let a_upper = Iri::new("HTTP://example.org/a").unwrap();
        assert_eq!(a, a2);
        assert_ne!(a, a_upper);
        assert_eq!(a, "http://example.org/a");
    }
}
