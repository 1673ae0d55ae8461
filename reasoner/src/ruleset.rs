//! I define the trait [`RuleSet`], as well as a number of implementations of that trait.
//!
//! A rule set is a fixed catalog of axiomatic triples and named [rules](Rule),
//! implementing a given entailment regime.
use deduce_api::ns::NsTerm;
use deduce_inmem::{TripleIds, TripleStore};

use crate::vocab::Vocab;

mod _simple;
pub use _simple::Simple;
mod _rdf;
pub use _rdf::Rdf;
mod _rdfs;
pub use _rdfs::Rdfs;

/// An axiomatic triple, holding in every graph under a given entailment regime.
pub type Axiom = [&'static NsTerm; 3];

/// An entailment rule.
///
/// `apply` must push into its output buffer the ids of every triple
/// licensed by the current content of the store.
/// It must be a pure function of the store:
/// it must not depend on anything else, and it must be monotonic.
/// All pushed ids must be ids of the store,
/// and form triples complying with the RDF data model.
#[derive(Clone, Copy)]
pub struct Rule {
    /// The name of the rule, used in diagnostics
    pub name: &'static str,
    /// The function computing the triples licensed by the rule
    pub apply: fn(&TripleStore, &Vocab, &mut Vec<TripleIds>),
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// A [`RuleSet`] implements a specific entailment regime.
pub trait RuleSet: Send + Sync {
    /// The axiomatic triples of this regime,
    /// inserted at the start of every closure computation.
    fn axioms() -> impl Iterator<Item = &'static Axiom>;
    /// The rules of this regime, applied at every pass of the closure computation.
    fn rules() -> &'static [Rule];
}
