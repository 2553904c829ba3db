//! Iterative solvers for the Relax workspace.
//!
//! - [`linear`] — relaxation methods for square linear systems `A·x = b`

pub mod linear;
