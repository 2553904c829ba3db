use relax_core::Matrix;

/// A relaxation rule that updates every component of `x` once per sweep.
///
/// Implementations may assume `a` is square, `b`, `x`, and `x_old` all have
/// `a.dim()` entries, and every diagonal entry of `a` is non-zero.
pub trait Method {
    /// Performs one sweep.
    ///
    /// On entry `x` and `x_old` hold the same iterate. On return `x` holds the
    /// next one; `x_old` is left untouched.
    fn sweep(&self, a: &Matrix, b: &[f64], x: &mut [f64], x_old: &[f64]);
}

/// Gauss-Seidel relaxation.
///
/// Rows are relaxed in increasing order, and each row reads the components
/// already updated earlier in the same sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GaussSeidel;

impl Method for GaussSeidel {
    fn sweep(&self, a: &Matrix, b: &[f64], x: &mut [f64], _x_old: &[f64]) {
        for (i, row) in a.rows().enumerate() {
            let sum = off_diagonal_dot(row, x, i);
            x[i] = (b[i] - sum) / row[i];
        }
    }
}

/// Jacobi relaxation.
///
/// Every row reads only the previous sweep's iterate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jacobi;

impl Method for Jacobi {
    fn sweep(&self, a: &Matrix, b: &[f64], x: &mut [f64], x_old: &[f64]) {
        for (i, row) in a.rows().enumerate() {
            let sum = off_diagonal_dot(row, x_old, i);
            x[i] = (b[i] - sum) / row[i];
        }
    }
}

/// Returns `Σ_{j≠i} row[j]·v[j]`.
fn off_diagonal_dot(row: &[f64], v: &[f64], i: usize) -> f64 {
    row.iter()
        .zip(v)
        .enumerate()
        .filter(|&(j, _)| j != i)
        .map(|(_, (a, v))| a * v)
        .sum()
}
