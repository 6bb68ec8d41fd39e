use orrery_core::State;

/// Event emitted by [`solve`](super::solve) for each sample.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// Time at this sample.
    pub time: f64,

    /// State at this sample.
    pub state: &'a State,
}
