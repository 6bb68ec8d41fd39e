use orrery_core::{State, VectorField};

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// Selects the stepping rule used by a [`Stepper`](super::Stepper).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "snake_case"))]
pub enum Method {
    /// Forward Euler, see [`euler`](super::euler).
    Euler,

    /// Classical Runge-Kutta, see [`rk4`](super::rk4).
    #[default]
    Rk4,
}

impl Method {
    /// Returns the conventional step size for this method.
    ///
    /// `0.01` for Euler and `0.001` for RK4.
    #[must_use]
    pub fn default_dt(self) -> f64 {
        match self {
            Self::Euler => 0.01,
            Self::Rk4 => 0.001,
        }
    }

    /// Advances `state` by one step of this method, without any checks.
    #[must_use]
    pub fn apply<F>(self, field: &F, time: f64, state: &State, dt: f64) -> State
    where
        F: VectorField + ?Sized,
    {
        match self {
            Self::Euler => super::euler(field, time, state, dt),
            Self::Rk4 => super::rk4(field, time, state, dt),
        }
    }
}
