//! I define the [`BlankNode`] type and its [`BnodeScope`].
//!
//! The local identifier of a blank node must satisfy
//! the `BLANK_NODE_LABEL` rule in [Turtle](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL)
//! (without the leading `_:`).
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// A modified production of Turtle's BLANK_NODE_LABEL according to the
    /// [Turtle grammar](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL).
    ///
    /// In contrast to the original rule this regular expression does not look
    /// for a leading `_:`. Accordingly it only checks if the label is valid.
    ///
    /// # Rule
    ///
    /// `BLANK_NODE_LABEL ::= (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')* PN_CHARS)?`
    static ref BNODE_ID: Regex = Regex::new(r"(?x)
      ^
      [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9]
      (
          [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
          |
          \u{2e} [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
      )*
      $
    ").unwrap();
}

static NEXT_SCOPE: AtomicU64 = AtomicU64::new(0);

/// The scope in which [`BlankNode`] identifiers are meaningful.
///
/// Each triple store owns exactly one scope.
/// Copies of a store (snapshots) share the scope of the original,
/// so that their blank nodes compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BnodeScope(u64);

impl BnodeScope {
    /// Allocate a new scope, distinct from every scope previously allocated in this process.
    pub fn fresh() -> Self {
        BnodeScope(NEXT_SCOPE.fetch_add(1, Ordering::Relaxed))
    }

    /// Mint a blank node in this scope.
    pub fn bnode(self, id: &str) -> Result<BlankNode, InvalidBnodeId> {
        BlankNode::new(self, id)
    }
}

impl fmt::Display for BnodeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A blank node, identified by a local id *within* a [`BnodeScope`].
///
/// Blank nodes are ordered by scope, then by identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankNode {
    scope: BnodeScope,
    id: Arc<str>,
}

impl BlankNode {
    /// Build a new [`BlankNode`],
    /// returning an error if `id` does not comply with Turtle's `BLANK_NODE_LABEL`.
    pub fn new(scope: BnodeScope, id: &str) -> Result<Self, InvalidBnodeId> {
        if BNODE_ID.is_match(id) {
            Ok(BlankNode {
                scope,
                id: Arc::from(id),
            })
        } else {
            Err(InvalidBnodeId(id.to_string()))
        }
    }

    /// The local identifier of this blank node.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The scope in which this blank node was minted.
    pub fn scope(&self) -> BnodeScope {
        self.scope
    }

    /// Check that this blank node belongs to `expected`.
    pub fn check_scope(&self, expected: BnodeScope) -> Result<(), BlankNodeScopeViolation> {
        if self.scope == expected {
            Ok(())
        } else {
            Err(BlankNodeScopeViolation {
                id: self.id.to_string(),
                found: self.scope,
                expected,
            })
        }
    }
}

/// This error is raised when trying to build an invalid blank node identifier.
#[derive(Clone, Debug, Error)]
#[error("The given blank node identifier '{0}' does not comply with Turtle's BLANK_NODE_LABEL")]
pub struct InvalidBnodeId(pub String);

/// This error is raised when a blank node minted in one scope
/// is inserted in a store owning another scope.
#[derive(Clone, Debug, Error)]
#[error("Blank node _:{id} belongs to scope {found}, not to scope {expected}")]
pub struct BlankNodeScopeViolation {
    /// The local identifier of the offending blank node
    pub id: String,
    /// The scope of the offending blank node
    pub found: BnodeScope,
    /// The scope of the store
    pub expected: BnodeScope,
}
