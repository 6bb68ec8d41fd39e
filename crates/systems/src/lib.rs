//! Vector fields for the systems this workspace integrates.
//!
//! - [`Gravity`]: planar Newtonian gravity between point masses, with the
//!   three-body configuration as its default
//! - [`Lorenz`]: the Lorenz attractor
//! - [`scenario`]: the initial conditions and run constants used with them
//!
//! Both fields implement [`orrery_core::VectorField`] and take their physical
//! parameters from a config struct at construction.

mod error;
mod gravity;
mod lorenz;

pub mod scenario;

pub use error::ConfigError;
pub use gravity::{Gravity, GravityConfig};
pub use lorenz::{Lorenz, LorenzConfig};
