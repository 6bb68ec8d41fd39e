use orrery_core::CapacityError;
use thiserror::Error;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// Configuration for a batch integration with [`solve`](super::solve).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(try_from = "RawConfig"))]
pub struct Config {
    start: f64,
    dt: f64,
    steps: usize,
}

/// Errors that can occur when validating driver settings.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("dt must be finite and non-zero")]
    Step,

    #[error("start time must be finite")]
    Start,

    #[error("span must be finite and non-negative, with a positive dt")]
    Span,

    #[error("step count must be less than usize::MAX")]
    Steps,

    #[error(transparent)]
    Capacity(#[from] CapacityError),
}

impl Config {
    /// Creates a config that takes `steps` steps of size `dt` from `start`.
    ///
    /// A negative `dt` integrates backward in time.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not finite, `dt` is zero or not finite,
    /// or `steps` is `usize::MAX` (the history could not be counted).
    pub fn new(start: f64, dt: f64, steps: usize) -> Result<Self, ConfigError> {
        validate_dt(dt)?;
        if !start.is_finite() {
            return Err(ConfigError::Start);
        }
        if steps == usize::MAX {
            return Err(ConfigError::Steps);
        }

        Ok(Self { start, dt, steps })
    }

    /// Creates a config whose samples lie on the grid `start, start + dt, …`
    /// strictly below `start + span`.
    ///
    /// That grid holds `ceil(span / dt)` samples, so the run takes one step
    /// fewer. A zero span still yields the initial sample.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not finite, `dt` is not finite and
    /// positive, `span` is not finite and non-negative, or `span / dt` is too
    /// large to count in a `usize`.
    pub fn over_span(start: f64, span: f64, dt: f64) -> Result<Self, ConfigError> {
        validate_dt(dt)?;
        if !span.is_finite() || span < 0.0 || dt < 0.0 {
            return Err(ConfigError::Span);
        }

        let samples = (span / dt).ceil();
        #[allow(clippy::cast_precision_loss)]
        let limit = usize::MAX as f64;
        if !samples.is_finite() || samples >= limit {
            return Err(ConfigError::Span);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let samples = samples as usize;

        Self::new(start, dt, samples.saturating_sub(1))
    }

    /// Returns the start time.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the step size.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the time of sample `step`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time_at(&self, step: usize) -> f64 {
        self.start + step as f64 * self.dt
    }
}

pub(super) fn validate_dt(dt: f64) -> Result<(), ConfigError> {
    if dt.is_finite() && dt != 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Step)
    }
}

/// Unvalidated form used when deserializing a [`Config`].
#[cfg(feature = "serde-derive")]
#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    start: f64,
    dt: f64,
    steps: usize,
}

#[cfg(feature = "serde-derive")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.dt, raw.steps)
    }
}
