//! Planar Newtonian gravity between point masses.
//!
//! The state holds four entries per body, in body order:
//!
//! ```text
//! [x_0, y_0, vx_0, vy_0, x_1, y_1, vx_1, vy_1, ...]
//! ```
//!
//! The derivative copies each velocity through and replaces it with the
//! body's acceleration:
//!
//! ```text
//! [vx_0, vy_0, ax_0, ay_0, vx_1, vy_1, ax_1, ay_1, ...]
//!
//! a_i = G * Σ_{j ≠ i} m_j * r_ij / |r_ij|³,   r_ij = p_j - p_i
//! ```
//!
//! which turns the second-order equations of motion into a first-order
//! system. A body's own mass cancels out of its acceleration.
//!
//! Coincident bodies are not guarded: the zero distance produces NaN or
//! infinite accelerations, which flow into every later step. Enable the
//! stepper's finite check to stop on them.

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use orrery_core::{State, VectorField};

use crate::ConfigError;

/// Entries per body in the state vector.
const STRIDE: usize = 4;

/// Physical parameters for [`Gravity`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct GravityConfig {
    /// Gravitational constant.
    pub g: f64,

    /// Mass of each body. The body count is the number of masses.
    pub masses: Vec<f64>,
}

impl GravityConfig {
    /// Three bodies of mass 10,000 with `G = 1`.
    #[must_use]
    pub fn three_body() -> Self {
        Self {
            g: 1.0,
            masses: vec![10_000.0; 3],
        }
    }
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self::three_body()
    }
}

/// Gravitational vector field for N bodies in the plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Gravity {
    g: f64,
    masses: Vec<f64>,
}

impl Gravity {
    /// Creates a gravity field from a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no bodies, `g` is not finite, or any
    /// mass is negative or not finite.
    pub fn new(config: GravityConfig) -> Result<Self, ConfigError> {
        let GravityConfig { g, masses } = config;

        if masses.is_empty() {
            return Err(ConfigError::NoBodies);
        }
        if !g.is_finite() {
            return Err(ConfigError::Gravity);
        }
        if let Some(index) = masses.iter().position(|m| !m.is_finite() || *m < 0.0) {
            return Err(ConfigError::Mass { index });
        }

        Ok(Self { g, masses })
    }

    /// The default three-body field.
    #[must_use]
    pub fn three_body() -> Self {
        let GravityConfig { g, masses } = GravityConfig::three_body();
        Self { g, masses }
    }

    /// Returns the number of bodies.
    #[must_use]
    pub fn bodies(&self) -> usize {
        self.masses.len()
    }

    #[must_use]
    pub fn g(&self) -> f64 {
        self.g
    }

    #[must_use]
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// Returns the acceleration of body `i` due to body `j` alone.
    ///
    /// Summing this over all `j ≠ i` gives body `i`'s acceleration, up to
    /// rounding. Newton's third law holds pairwise:
    /// `m_i * a(i, j) == -m_j * a(j, i)`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not a body index for `state`.
    #[must_use]
    pub fn pairwise_acceleration(&self, state: &State, i: usize, j: usize) -> [f64; 2] {
        let [ax, ay] = self.pull(state, i, j);
        [self.g * ax, self.g * ay]
    }

    /// Returns the total linear momentum `Σ m_i v_i`.
    ///
    /// # Panics
    ///
    /// Panics if `state` is shorter than [`dimension`](VectorField::dimension).
    #[must_use]
    pub fn momentum(&self, state: &State) -> [f64; 2] {
        self.masses
            .iter()
            .enumerate()
            .fold([0.0, 0.0], |[px, py], (i, m)| {
                let base = i * STRIDE;
                [px + m * state[base + 2], py + m * state[base + 3]]
            })
    }

    /// Returns the total mechanical energy, kinetic plus potential.
    ///
    /// # Panics
    ///
    /// Panics if `state` is shorter than [`dimension`](VectorField::dimension).
    #[must_use]
    pub fn energy(&self, state: &State) -> f64 {
        let mut kinetic = 0.0;
        let mut potential = 0.0;

        for (i, m_i) in self.masses.iter().enumerate() {
            let base = i * STRIDE;
            let (vx, vy) = (state[base + 2], state[base + 3]);
            kinetic += 0.5 * m_i * (vx * vx + vy * vy);

            for (j, m_j) in self.masses.iter().enumerate().skip(i + 1) {
                let [dx, dy] = displacement(state, i, j);
                potential -= self.g * m_i * m_j / (dx * dx + dy * dy).sqrt();
            }
        }

        kinetic + potential
    }

    /// Acceleration of body `i` due to body `j`, without `G`.
    fn pull(&self, state: &State, i: usize, j: usize) -> [f64; 2] {
        let [dx, dy] = displacement(state, i, j);
        let cube = (dx * dx + dy * dy).sqrt().powf(3.0);
        let m = self.masses[j];
        [m * dx / cube, m * dy / cube]
    }
}

impl VectorField for Gravity {
    fn dimension(&self) -> usize {
        self.masses.len() * STRIDE
    }

    fn derivative(&self, _time: f64, state: &State) -> State {
        let n = self.masses.len();
        let mut out = Vec::with_capacity(n * STRIDE);

        for i in 0..n {
            let base = i * STRIDE;

            // Sum the unscaled pulls first and apply G once per body.
            let (mut ax, mut ay) = (0.0, 0.0);
            for j in (0..n).filter(|&j| j != i) {
                let [px, py] = self.pull(state, i, j);
                ax += px;
                ay += py;
            }

            out.extend([
                state[base + 2],
                state[base + 3],
                self.g * ax,
                self.g * ay,
            ]);
        }

        State::new(out)
    }
}

/// Returns `p_j - p_i`.
fn displacement(state: &State, i: usize, j: usize) -> [f64; 2] {
    let (bi, bj) = (i * STRIDE, j * STRIDE);
    [state[bj] - state[bi], state[bj + 1] - state[bi + 1]]
}
