use crate::{DimensionError, Matrix};

/// A square linear system `A·x = b`.
///
/// Construction guarantees that `b` has one entry per row of `A`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    a: Matrix,
    b: Vec<f64>,
}

impl LinearSystem {
    /// Creates a system from a coefficient matrix and right-hand side.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::VectorLength`] if `b.len() != a.dim()`.
    pub fn new(a: Matrix, b: Vec<f64>) -> Result<Self, DimensionError> {
        DimensionError::check_len("b", &b, a.dim())?;
        Ok(Self { a, b })
    }

    /// Returns the number of unknowns.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.a.dim()
    }

    /// Returns the coefficient matrix.
    #[must_use]
    pub fn a(&self) -> &Matrix {
        &self.a
    }

    /// Returns the right-hand side.
    #[must_use]
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Returns the index of the first zero diagonal entry, if any.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn zero_pivot(&self) -> Option<usize> {
        self.a.diagonal().position(|d| d == 0.0)
    }

    /// Computes the residual `b - A·x`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::VectorLength`] if `x` has the wrong length.
    pub fn residual(&self, x: &[f64]) -> Result<Vec<f64>, DimensionError> {
        residual(&self.a, &self.b, x)
    }
}

/// Computes the residual `r[i] = b[i] - Σ_j A[i][j]·x[j]`.
///
/// A small residual shows `x` is consistent with the system; it does not by
/// itself prove an iteration converged to the true solution.
///
/// # Errors
///
/// Returns [`DimensionError::VectorLength`] if `b` or `x` does not have one
/// entry per row of `a`.
pub fn residual(a: &Matrix, b: &[f64], x: &[f64]) -> Result<Vec<f64>, DimensionError> {
    DimensionError::check_len("b", b, a.dim())?;
    let ax = a.mul_vec(x)?;
    Ok(b.iter().zip(ax).map(|(b, ax)| b - ax).collect())
}
