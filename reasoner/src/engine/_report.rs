use std::fmt;
use std::time::Duration;

/// The state of a closure computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClosureState {
    /// The computation was stopped before a fixpoint was reached;
    /// the store may lack some entailed triples.
    Running,
    /// The last pass added no triple: the store is closed under the rule set.
    Fixpoint,
}

/// The outcome of [`ClosureEngine::expand`](super::ClosureEngine::expand).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClosureReport {
    /// The state in which the computation ended
    pub state: ClosureState,
    /// The number of passes performed
    pub passes: usize,
    /// The number of triples added to the store, axioms included
    pub added: usize,
    /// The wall-clock duration of the computation
    pub elapsed: Duration,
}

impl ClosureReport {
    /// Whether the computation reached a fixpoint.
    pub fn is_fixpoint(&self) -> bool {
        self.state == ClosureState::Fixpoint
    }
}

impl fmt::Display for ClosureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            ClosureState::Running => "stopped before fixpoint",
            ClosureState::Fixpoint => "fixpoint reached",
        };
        write!(
            f,
            "{state} after {} pass(es), {} triple(s) added in {:?}",
            self.passes, self.added, self.elapsed
        )
    }
}
