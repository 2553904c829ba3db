use relax_core::{DimensionError, LinearSystem, max_abs_diff};

use super::{Error, Method, Solution, Status};

/// An owned record of one completed sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    /// Sweep counter (1-based).
    pub iter: usize,

    /// The iterate after this sweep.
    pub x: Vec<f64>,

    /// Largest absolute component change made by this sweep.
    pub error: f64,
}

/// A lazy sequence of relaxation sweeps.
///
/// Each call to [`Iterator::next`] performs one sweep and yields its
/// [`Sweep`] record. The sequence never ends on its own for a non-empty
/// system; bound it with [`Iterator::take`] or stop on the error you need.
/// An empty system yields nothing. Restarting means building a new `Sweeps`.
///
/// ```
/// use relax_core::{LinearSystem, Matrix};
/// use relax_solvers::linear::{GaussSeidel, Sweeps};
///
/// let a = Matrix::from_rows(&[[4.0, 1.0], [2.0, 3.0]]).unwrap();
/// let system = LinearSystem::new(a, vec![1.0, 2.0]).unwrap();
///
/// let first_small = Sweeps::new(GaussSeidel, &system, vec![0.0, 0.0])
///     .unwrap()
///     .take(100)
///     .find(|sweep| sweep.error < 1e-10)
///     .unwrap();
///
/// assert!((first_small.x[0] - 0.1).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Sweeps<'a, M> {
    method: M,
    system: &'a LinearSystem,
    x: Vec<f64>,
    x_old: Vec<f64>,
    iter: usize,
    error: f64,
}

impl<'a, M: Method> Sweeps<'a, M> {
    /// Prepares to sweep `system` starting from `x0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] if `x0` does not have one entry per
    /// unknown, or [`Error::ZeroPivot`] if any diagonal entry is zero.
    pub fn new(method: M, system: &'a LinearSystem, x0: Vec<f64>) -> Result<Self, Error> {
        if x0.len() != system.dim() {
            return Err(DimensionError::VectorLength {
                name: "x0",
                expected: system.dim(),
                actual: x0.len(),
            }
            .into());
        }

        if let Some(row) = system.zero_pivot() {
            return Err(Error::ZeroPivot { row });
        }

        Ok(Self {
            method,
            system,
            x_old: x0.clone(),
            x: x0,
            iter: 0,
            error: 0.0,
        })
    }

    /// Returns the current iterate.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Returns the number of sweeps performed so far.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.iter
    }

    /// Returns the step error of the last sweep, or `0.0` before the first.
    #[must_use]
    pub fn error(&self) -> f64 {
        self.error
    }

    /// Performs one sweep in place and returns its step error.
    pub(crate) fn advance(&mut self) -> f64 {
        self.x_old.copy_from_slice(&self.x);
        self.method.sweep(
            self.system.a(),
            self.system.b(),
            &mut self.x,
            &self.x_old,
        );
        self.iter += 1;
        self.error = max_abs_diff(&self.x, &self.x_old);
        self.error
    }

    /// Consumes the sequence and packages the current iterate.
    pub(crate) fn finish(self, status: Status) -> Solution {
        Solution {
            status,
            x: self.x,
            iters: self.iter,
            error: self.error,
        }
    }
}

impl<M: Method> Iterator for Sweeps<'_, M> {
    type Item = Sweep;

    fn next(&mut self) -> Option<Sweep> {
        if self.system.dim() == 0 {
            return None;
        }

        let error = self.advance();
        Some(Sweep {
            iter: self.iter,
            x: self.x.clone(),
            error,
        })
    }
}
