//! Core types for the Relax iterative solvers.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! drivers build on:
//!
//! - [`Matrix`] — a dense square coefficient matrix
//! - [`LinearSystem`] — a matrix paired with a matching right-hand side
//! - [`residual`] — the residual `b - A·x` of an approximate solution
//! - [`inf_norm`], [`max_abs_diff`] — the norms used for convergence and reporting
//! - [`Observer`] — receives solver events and optionally returns control actions

mod error;
mod matrix;
mod observer;
mod system;
mod vector;

pub use error::DimensionError;
pub use matrix::Matrix;
pub use observer::Observer;
pub use system::{LinearSystem, residual};
pub use vector::{inf_norm, max_abs_diff};
