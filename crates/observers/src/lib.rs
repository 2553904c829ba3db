//! Reusable observers for the Relax solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver event exposing an iterate and a step error.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIterate`], [`HasStepError`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TraceWriter`] — renders each iterate as a line of text
//! - [`LogObserver`] — emits each iterate through the `log` facade
//! - [`Recorder`] — keeps owned copies of every sweep
//! - [`DivergenceGuard`] — stops a run whose step error blows up
//!
//! [`Observer`]: relax_core::Observer
//! [`HasIterate`]: traits::HasIterate
//! [`HasStepError`]: traits::HasStepError
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod format;
mod guard;
mod logging;
mod recorder;
mod trace;

pub use format::{format_value, format_vector};
pub use guard::DivergenceGuard;
pub use logging::LogObserver;
pub use recorder::Recorder;
pub use trace::TraceWriter;
