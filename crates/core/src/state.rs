use std::ops::Deref;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::StepIntegrable;

/// An ordered, fixed-length vector of degrees of freedom.
///
/// Entries are positional: the meaning of index `i` is fixed by the vector
/// field that consumes the state (for example, `[x, y, vx, vy]` per body for
/// planar gravity, or `[x, y, z]` for the Lorenz system).
///
/// A `State` is its own derivative type, so the integrators can combine
/// stage derivatives with the same operations they use to step the state.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(transparent))]
pub struct State(Vec<f64>);

impl State {
    /// Creates a state from its entries.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Creates a state of `len` zeros.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consumes the state and returns its entries.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// Returns the index of the first NaN or infinite entry, if any.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<usize> {
        self.0.iter().position(|v| !v.is_finite())
    }

    /// Returns `true` if every entry is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.first_non_finite().is_none()
    }

    /// Returns `self + other * scale`, entry by entry.
    ///
    /// Entries beyond the shorter of the two vectors are dropped, so callers
    /// must check lengths before combining states.
    #[must_use]
    pub fn add_scaled(&self, other: &State, scale: f64) -> State {
        self.0
            .iter()
            .zip(&other.0)
            .map(|(s, d)| s + d * scale)
            .collect()
    }
}

impl StepIntegrable<f64> for State {
    type Derivative = State;

    fn step(&self, derivative: &State, delta: f64) -> Self {
        self.add_scaled(derivative, delta)
    }
}

impl Deref for State {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for State {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for State {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl<const N: usize> From<[f64; N]> for State {
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}

impl From<State> for Vec<f64> {
    fn from(state: State) -> Self {
        state.0
    }
}

impl FromIterator<f64> for State {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
