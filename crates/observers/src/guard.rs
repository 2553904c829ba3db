use relax_core::Observer;

use crate::traits::{CanStopEarly, HasStepError};

/// Stops a run once its step error is non-finite or above a ceiling.
///
/// Solvers leave NaN and ∞ in the iterates; this guard is how a caller opts
/// into ending such runs instead of sweeping to the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergenceGuard {
    ceiling: f64,
}

impl Default for DivergenceGuard {
    fn default() -> Self {
        Self {
            ceiling: f64::INFINITY,
        }
    }
}

impl DivergenceGuard {
    /// Creates a guard that stops when the step error exceeds `ceiling`.
    #[must_use]
    pub fn new(ceiling: f64) -> Self {
        Self { ceiling }
    }

    /// Returns a stop action if `event` shows the run diverging.
    pub fn check<E: HasStepError, A: CanStopEarly>(&self, event: &E) -> Option<A> {
        let error = event.step_error()?;
        if error.is_finite() && error <= self.ceiling {
            return None;
        }
        log::warn!("step error {error:e} exceeds ceiling {:e}, stopping", self.ceiling);
        Some(A::stop_early())
    }
}

impl<E, A> Observer<E, A> for DivergenceGuard
where
    E: HasStepError,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.check(event)
    }
}
