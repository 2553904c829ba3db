//! Relaxation solvers for square linear systems `A·x = b`.
//!
//! A relaxation method repeatedly sweeps the rows of `A`, solving row `i` for
//! `x[i]` with the other components held fixed:
//!
//! ```text
//! x[i] = (b[i] - Σ_{j≠i} A[i][j]·x[j]) / A[i][i]
//! ```
//!
//! The step error of a sweep is the infinity norm of the change it made. A run
//! converges on the first sweep whose step error is strictly below the
//! configured tolerance.
//!
//! # Solvers
//!
//! - [`gauss_seidel`] — each row reads components already updated this sweep
//! - [`jacobi`] — each row reads only the previous sweep
//!
//! # Observer Events
//!
//! Every solver emits [`Event::Start`] with the initial guess, then one
//! [`Event::Sweep`] per sweep. Observers can return [`Action::StopEarly`] to
//! halt after any event.
//!
//! # Preconditions
//!
//! Convergence is only guaranteed for suitable systems (for example strictly
//! diagonally dominant ones); no such check is made. Shapes and non-zero
//! diagonal entries are checked before the first sweep. Anything else, such as
//! NaN or ∞ from a diverging run, flows through the iterates unchanged.

mod action;
mod config;
mod error;
mod event;
mod method;
mod solution;
mod sweeps;

pub mod gauss_seidel;
pub mod jacobi;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use method::{GaussSeidel, Jacobi, Method};
pub use solution::{Solution, Status};
pub use sweeps::{Sweep, Sweeps};

use relax_core::{LinearSystem, Observer};

/// Solves `system` with the given relaxation `method`.
///
/// # Algorithm
///
/// 1. Validate `x0` and the diagonal of `A`.
/// 2. Emit [`Event::Start`] with `x0`.
/// 3. An empty system converges immediately with zero sweeps.
/// 4. For each sweep `k` in `1..=max_iters`:
///    - Sweep every row once and compute the step error.
///    - Emit [`Event::Sweep`]; stop if the observer returns [`Action::StopEarly`].
///    - If the step error is below the tolerance, return the sweep-`k` iterate.
/// 5. Return the last iterate with [`Status::MaxIters`].
///
/// # Errors
///
/// Returns an error if `x0` does not match the system size or a diagonal
/// entry of `A` is zero.
pub fn solve<M, Obs>(
    method: M,
    system: &LinearSystem,
    x0: Vec<f64>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Method,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut sweeps = Sweeps::new(method, system, x0)?;
    log::debug!(
        "relaxing {n}x{n} system (tolerance = {tol:e}, max_iters = {max})",
        n = system.dim(),
        tol = config.tolerance(),
        max = config.max_iters(),
    );

    let action = observer.observe(&Event::Start { x: sweeps.x() });
    if let Some(Action::StopEarly) = action {
        return Ok(sweeps.finish(Status::StoppedByObserver));
    }

    if system.dim() == 0 {
        return Ok(sweeps.finish(Status::Converged));
    }

    for _ in 0..config.max_iters() {
        let error = sweeps.advance();
        log::trace!("sweep {}: error = {error:e}", sweeps.iters());

        let event = Event::Sweep {
            iter: sweeps.iters(),
            x: sweeps.x(),
            error,
        };
        let action = observer.observe(&event);

        if let Some(Action::StopEarly) = action {
            log::debug!("stopped by observer after {} sweeps", sweeps.iters());
            return Ok(sweeps.finish(Status::StoppedByObserver));
        }

        if error < config.tolerance() {
            log::debug!("converged after {} sweeps", sweeps.iters());
            return Ok(sweeps.finish(Status::Converged));
        }
    }

    log::warn!(
        "no convergence after {} sweeps (error = {:e}, tolerance = {:e})",
        sweeps.iters(),
        sweeps.error(),
        config.tolerance(),
    );
    Ok(sweeps.finish(Status::MaxIters))
}

/// Solves `system` with the given relaxation `method` without observation.
///
/// # Errors
///
/// Returns an error if `x0` does not match the system size or a diagonal
/// entry of `A` is zero.
pub fn solve_unobserved<M: Method>(
    method: M,
    system: &LinearSystem,
    x0: Vec<f64>,
    config: &Config,
) -> Result<Solution, Error> {
    solve(method, system, x0, config, ())
}
