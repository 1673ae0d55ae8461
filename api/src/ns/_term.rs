use super::*;

/// A term produced by a namespace module.
///
/// The raison d'être of this type, compared to [`Iri`],
/// is that it stores the IRI in two parts (namespace and suffix),
/// and can therefore be built in a `const` context.
#[derive(Clone, Copy, Debug)]
pub struct NsTerm {
    ns: &'static str,
    /// NB: suffix must satisfy that ns+suffix is still a valid IRI
    suffix: &'static str,
}

impl fmt::Display for NsTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.ns, self.suffix)
    }
}

impl NsTerm {
    /// Make an NsTerm without checking that it produces a valid IRI.
    pub const fn new_unchecked(ns: &'static str, suffix: &'static str) -> Self {
        NsTerm { ns, suffix }
    }

    /// Return an [`Iri`] representing this term.
    pub fn iri(&self) -> Iri {
        Iri::new_unchecked(&self.to_string())
    }

    /// Return a [`Term`] representing this term.
    pub fn term(&self) -> Term {
        Term::Iri(self.iri())
    }

    /// Whether `iri` is the IRI of this term, without allocating.
    pub fn matches(&self, iri: &str) -> bool {
        iri.len() == self.ns.len() + self.suffix.len()
            && iri.starts_with(self.ns)
            && iri.ends_with(self.suffix)
    }
}

impl PartialEq<Iri> for NsTerm {
    fn eq(&self, other: &Iri) -> bool {
        self.matches(other.as_str())
    }
}

impl PartialEq<Term> for NsTerm {
    fn eq(&self, other: &Term) -> bool {
        match other {
            Term::Iri(iri) => self == iri,
            _ => false,
        }
    }
}

impl From<NsTerm> for Iri {
    fn from(value: NsTerm) -> Self {
        value.iri()
    }
}

impl From<NsTerm> for Term {
    fn from(value: NsTerm) -> Self {
        value.term()
    }
}
