use crate::fixed_step;

use super::ConfigError;

/// Errors that can occur while driving an integration.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid driver config: {0}")]
    Config(#[from] ConfigError),

    /// The stepper rejected a step. Step 0 refers to the initial state.
    #[error("step {step} failed: {source}")]
    Step {
        step: usize,
        #[source]
        source: fixed_step::Error,
    },
}
