use super::{Axiom, Rule, RuleSet};

/// A [`RuleSet`] for [Simple semantics](https://www.w3.org/TR/rdf11-mt/#simple-interpretations)
///
/// Simple entailment has no axioms and no rules,
/// so the closure of a graph is the graph itself.
pub struct Simple;

impl RuleSet for Simple {
    fn axioms() -> impl Iterator<Item = &'static Axiom> {
        std::iter::empty()
    }
    fn rules() -> &'static [Rule] {
        &[]
    }
}
