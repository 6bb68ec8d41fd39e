use orrery_core::Sample;

/// Indicates how the driver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a batch integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the driver terminated.
    pub status: Status,

    /// Every sample, including the initial state.
    pub history: Vec<Sample>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl Solution {
    /// Returns the final sample.
    ///
    /// The history always holds at least the initial sample.
    #[must_use]
    pub fn last(&self) -> &Sample {
        &self.history[self.history.len() - 1]
    }

    /// Iterates over one state entry across the whole history.
    pub fn column(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.history
            .iter()
            .filter_map(move |s| s.state.get(index).copied())
    }
}
