#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use super::Method;

/// Configuration for a [`Stepper`](super::Stepper).
///
/// The default is RK4 with the finite-value check disabled, which reproduces
/// unchecked trajectories exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(default))]
pub struct Config {
    /// Stepping rule.
    pub method: Method,

    /// Reject steps that produce NaN or infinite entries.
    pub check_finite: bool,
}

impl Config {
    /// Creates a config for `method` with the finite-value check disabled.
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            check_finite: false,
        }
    }

    /// Enables the finite-value check.
    #[must_use]
    pub fn with_finite_check(mut self) -> Self {
        self.check_finite = true;
        self
    }
}
