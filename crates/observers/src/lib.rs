//! Reusable observers for orrery integration runs.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any driver whose events carry a state.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-driver observers
//!   ([`HasState`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`FiniteGuard`]: stops at the first NaN or infinite state
//! - [`TrailRecorder`]: keeps a bounded trail of recent samples
//! - [`CsvWriter`]: writes every sample as a CSV row
//! - [`chain`]: runs two observers on every event
//!
//! [`Observer`]: orrery_core::Observer
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod chain;
mod csv;
mod finite;
mod trail;

pub use chain::{Chain, chain};
pub use csv::CsvWriter;
pub use finite::{FiniteGuard, NonFinite};
pub use trail::TrailRecorder;
