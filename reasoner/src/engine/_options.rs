use std::time::Duration;

/// Options governing a [`ClosureEngine`](super::ClosureEngine).
///
/// By default, the engine runs until a fixpoint is reached,
/// on the global [`rayon`] thread pool.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClosureOptions {
    max_passes: Option<usize>,
    max_duration: Option<Duration>,
    threads: Option<usize>,
}

impl ClosureOptions {
    /// Build a new closure options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// The maximum number of passes, if any.
    ///
    /// When it is reached before a fixpoint,
    /// the closure stops in the [`Running`](super::ClosureState::Running) state.
    pub fn max_passes(&self) -> Option<usize> {
        self.max_passes
    }

    /// The maximum wall-clock duration, if any.
    ///
    /// It is checked before each pass, so the actual duration may exceed it by one pass.
    pub fn max_duration(&self) -> Option<Duration> {
        self.max_duration
    }

    /// The size of the dedicated thread pool, if any.
    ///
    /// When `None`, the global [`rayon`] thread pool is used.
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Change the [`max_passes`](Self::max_passes) option
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = Some(max_passes);
        self
    }

    /// Change the [`max_passes`](Self::max_passes) option to `None`
    pub fn with_no_max_passes(mut self) -> Self {
        self.max_passes = None;
        self
    }

    /// Change the [`max_duration`](Self::max_duration) option
    pub fn with_max_duration(mut self, max_duration: Duration) -> Self {
        self.max_duration = Some(max_duration);
        self
    }

    /// Change the [`max_duration`](Self::max_duration) option to `None`
    pub fn with_no_max_duration(mut self) -> Self {
        self.max_duration = None;
        self
    }

    /// Change the [`threads`](Self::threads) option
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Change the [`threads`](Self::threads) option to `None`
    pub fn with_no_threads(mut self) -> Self {
        self.threads = None;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builder() {
        let o = ClosureOptions::new();
        assert_eq!(o.max_passes(), None);
        assert_eq!(o.max_duration(), None);
        assert_eq!(o.threads(), None);

        let o = o
            .with_max_passes(3)
            .with_max_duration(Duration::from_secs(1))
            .with_threads(2);
        assert_eq!(o.max_passes(), Some(3));
        assert_eq!(o.max_duration(), Some(Duration::from_secs(1)));
        assert_eq!(o.threads(), Some(2));

        let o = o.with_no_max_passes().with_no_max_duration().with_no_threads();
        assert_eq!(o, ClosureOptions::default());
    }
}
