//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written once works with every relaxation method.
//!
//! # Event traits
//!
//! - [`HasIterate`] — events that carry the current iterate
//! - [`HasStepError`] — events that may carry a sweep's step error
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use relax_core::Observer;
//! use relax_observers::traits::{CanStopEarly, HasStepError};
//!
//! struct Patience {
//!     tolerance: f64,
//!     min_iters: usize,
//!     seen: usize,
//! }
//!
//! impl<E: HasStepError, A: CanStopEarly> Observer<E, A> for Patience {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let error = event.step_error()?;
//!         self.seen += 1;
//!         if self.seen >= self.min_iters && error < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use relax_solvers::linear;

/// An event that carries an iterate.
pub trait HasIterate {
    /// Returns the sweep counter, `0` before the first sweep.
    fn iter(&self) -> usize;

    /// Returns the iterate.
    fn iterate(&self) -> &[f64];
}

/// An event that may carry the step error of a sweep.
pub trait HasStepError {
    /// Returns the step error, or `None` if no sweep has run yet.
    fn step_error(&self) -> Option<f64>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasIterate for linear::Event<'_> {
    fn iter(&self) -> usize {
        linear::Event::iter(self)
    }

    fn iterate(&self) -> &[f64] {
        self.x()
    }
}

impl HasStepError for linear::Event<'_> {
    fn step_error(&self) -> Option<f64> {
        self.error()
    }
}

impl CanStopEarly for linear::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
