//! Initial conditions and run constants for the bundled scenarios.
//!
//! - The live three-body run starts three equal masses at rest and keeps a
//!   trail of the last [`MAX_HISTORY`] states.
//! - The Lorenz run integrates an ensemble of nearly identical starts over
//!   [`LORENZ_SPAN`] time units to show sensitive dependence on initial
//!   conditions.

use orrery_core::State;

/// Trail length for the live three-body run.
pub const MAX_HISTORY: usize = 10_000;

/// Duration of the Lorenz ensemble run.
pub const LORENZ_SPAN: f64 = 100.0;

/// Number of trajectories in the Lorenz ensemble.
pub const LORENZ_ENSEMBLE: usize = 3;

/// Offset in `z` between neighbouring Lorenz starts.
pub const LORENZ_EPSILON: f64 = 1e-5;

/// Three bodies at rest: `(-5, 10)`, `(12, -7)`, `(-7, -3)`.
#[must_use]
pub fn three_body_initial() -> State {
    State::from([
        -5.0, 10.0, 0.0, 0.0, //
        12.0, -7.0, 0.0, 0.0, //
        -7.0, -3.0, 0.0, 0.0,
    ])
}

/// The Lorenz start `(10, 10, 10)`.
#[must_use]
pub fn lorenz_initial() -> State {
    State::from([10.0, 10.0, 10.0])
}

/// Returns `count` Lorenz starts `(10, 10, 10 + i * epsilon)`.
#[must_use]
pub fn lorenz_ensemble(count: usize, epsilon: f64) -> Vec<State> {
    (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let offset = i as f64 * epsilon;
            State::from([10.0, 10.0, 10.0 + offset])
        })
        .collect()
}
