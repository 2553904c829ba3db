//! Gauss-Seidel relaxation.
//!
//! Rows are relaxed in increasing index order. Row `i` reads components
//! `0..i` as already updated in the current sweep and `i+1..n` from the
//! previous sweep, which is what separates Gauss-Seidel from [`jacobi`].
//!
//! ```ignore
//! use relax_solvers::linear::{Config, gauss_seidel};
//!
//! let solution = gauss_seidel::solve_unobserved(&system, x0, &Config::default())?;
//!
//! if solution.is_converged() {
//!     println!("converged after {} sweeps", solution.iters);
//! }
//! ```
//!
//! [`jacobi`]: super::jacobi


use relax_core::{LinearSystem, Observer};

use super::{Action, Config, Error, Event, GaussSeidel, Solution, Sweeps};

/// Solves `system` by Gauss-Seidel iteration starting from `x0`.
///
/// See [`linear::solve`](super::solve) for the algorithm and event timing.
///
/// # Errors
///
/// Returns an error if `x0` does not match the system size or a diagonal
/// entry of `A` is zero.
pub fn solve<Obs>(
    system: &LinearSystem,
    x0: Vec<f64>,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    super::solve(GaussSeidel, system, x0, config, observer)
}

/// Solves `system` by Gauss-Seidel iteration without observation.
///
/// # Errors
///
/// Returns an error if `x0` does not match the system size or a diagonal
/// entry of `A` is zero.
pub fn solve_unobserved(
    system: &LinearSystem,
    x0: Vec<f64>,
    config: &Config,
) -> Result<Solution, Error> {
    solve(system, x0, config, ())
}

/// Returns the lazy sequence of Gauss-Seidel sweeps starting from `x0`.
///
/// # Errors
///
/// Returns an error if `x0` does not match the system size or a diagonal
/// entry of `A` is zero.
pub fn sweeps(system: &LinearSystem, x0: Vec<f64>) -> Result<Sweeps<'_, GaussSeidel>, Error> {
    Sweeps::new(GaussSeidel, system, x0)
}
