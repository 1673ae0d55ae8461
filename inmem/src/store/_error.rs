use deduce_api::term::BlankNodeScopeViolation;
use deduce_api::triple::MalformedTriple;
use thiserror::Error;

/// This error is raised when a triple can not be inserted in a [`TripleStore`](super::TripleStore).
#[derive(Clone, Debug, Error)]
pub enum InsertError {
    /// The triple does not comply with the RDF data model
    #[error(transparent)]
    Malformed(#[from] MalformedTriple),
    /// The triple contains a blank node from another store
    #[error(transparent)]
    Scope(#[from] BlankNodeScopeViolation),
}
