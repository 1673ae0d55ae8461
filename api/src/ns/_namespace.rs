use super::*;

/// A custom namespace.
///
/// The [`get`](Namespace::get) method can be used to create a new IRI by concatenating a suffix to this namespace's IRI.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Namespace(Iri);

impl Namespace {
    /// Build a custom namespace based on the given IRI.
    ///
    /// `iri` must be a valid IRI, otherwise this constructor returns an error.
    pub fn new(iri: &str) -> Result<Self, InvalidIri> {
        Iri::new(iri).map(Namespace)
    }

    /// Build an IRI by appending `suffix` to this namespace.
    ///
    /// Return an error if the concatenation produces an invalid IRI.
    pub fn get(&self, suffix: &str) -> Result<Iri, InvalidIri> {
        Iri::new(&format!("{}{suffix}", self.0.as_str()))
    }

    /// Consume this Namespace and return the inner [`Iri`].
    pub fn inner(self) -> Iri {
        self.0
    }
}

impl From<Iri> for Namespace {
    fn from(other: Iri) -> Self {
        Namespace(other)
    }
}

impl std::ops::Deref for Namespace {
    type Target = Iri;

    fn deref(&self) -> &Iri {
        &self.0
    }
}
