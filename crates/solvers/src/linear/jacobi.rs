//! Jacobi relaxation.
//!
//! Every component of a sweep is computed from the previous sweep's iterate.
//! Jacobi usually needs more sweeps than [`gauss_seidel`] on the same system.
//!
//! [`gauss_seidel`]: super::gauss_seidel

use relax_core::{LinearSystem, Observer};

use super::{Action, Config, Error, Event, Jacobi, Solution, Sweeps};

/// Solves `system` by Jacobi iteration starting from `x0`.
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
    super::solve(Jacobi, system, x0, config, observer)
}

/// Solves `system` by Jacobi iteration without observation.
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

/// Returns the lazy sequence of Jacobi sweeps starting from `x0`.
///
/// # Errors
///
/// Returns an error if `x0` does not match the system size or a diagonal
/// entry of `A` is zero.
pub fn sweeps(system: &LinearSystem, x0: Vec<f64>) -> Result<Sweeps<'_, Jacobi>, Error> {
    Sweeps::new(Jacobi, system, x0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use relax_core::Matrix;

    use crate::linear::{Status, gauss_seidel};

    #[test]
    fn converges_on_dominant_system() {
        let a = Matrix::from_rows(&[[4.0, 1.0], [2.0, 3.0]]).expect("square");
        let system = LinearSystem::new(a, vec![1.0, 2.0]).expect("matching b");
        let config = Config::new(1e-12, 200).expect("valid");

        let solution = solve_unobserved(&system, vec![0.0, 0.0], &config).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x[0], 0.1, epsilon = 1e-10);
        assert_relative_eq!(solution.x[1], 0.6, epsilon = 1e-10);
    }

    #[test]
    fn needs_more_sweeps_than_gauss_seidel() {
        let a = Matrix::from_rows(&[[4.0, 1.0, 1.0], [1.0, 5.0, 2.0], [2.0, 1.0, 6.0]])
            .expect("square");
        let system = LinearSystem::new(a, vec![6.0, 8.0, 9.0]).expect("matching b");
        let config = Config::new(1e-10, 500).expect("valid");

        let jacobi = solve_unobserved(&system, vec![0.0; 3], &config).expect("should solve");
        let seidel =
            gauss_seidel::solve_unobserved(&system, vec![0.0; 3], &config).expect("should solve");

        assert!(jacobi.is_converged() && seidel.is_converged());
        assert!(seidel.iters < jacobi.iters);
    }
}
