#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use orrery_core::{State, VectorField};

use crate::ConfigError;

/// Parameters of the Lorenz system.
///
/// Defaults to the classic chaotic regime: σ = 10, ρ = 28, β = 8/3.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(default))]
pub struct LorenzConfig {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
}

impl Default for LorenzConfig {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        }
    }
}

/// The Lorenz vector field on `[x, y, z]`:
///
/// ```text
/// dx/dt = σ (y - x)
/// dy/dt = x (ρ - z) - y
/// dz/dt = x y - β z
/// ```
///
/// The system is autonomous; the time argument is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lorenz {
    config: LorenzConfig,
}

impl Lorenz {
    /// Creates a Lorenz field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parameter`] naming the first non-finite parameter.
    pub fn new(config: LorenzConfig) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("sigma", config.sigma),
            ("rho", config.rho),
            ("beta", config.beta),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Parameter { name });
            }
        }

        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> LorenzConfig {
        self.config
    }

    /// Returns the fixed points of the system.
    ///
    /// The origin is always a fixed point. For `ρ > 1` there are two more,
    /// `(±√(β(ρ−1)), ±√(β(ρ−1)), ρ−1)`.
    #[must_use]
    pub fn fixed_points(&self) -> Vec<State> {
        let LorenzConfig { rho, beta, .. } = self.config;

        let mut points = vec![State::zeros(3)];
        if rho > 1.0 && beta >= 0.0 {
            let c = (beta * (rho - 1.0)).sqrt();
            points.push(State::from([c, c, rho - 1.0]));
            points.push(State::from([-c, -c, rho - 1.0]));
        }
        points
    }
}

impl VectorField for Lorenz {
    fn dimension(&self) -> usize {
        3
    }

    fn derivative(&self, _time: f64, state: &State) -> State {
        let LorenzConfig { sigma, rho, beta } = self.config;
        let (x, y, z) = (state[0], state[1], state[2]);

        State::from([sigma * (y - x), x * (rho - z) - y, x * y - beta * z])
    }
}
