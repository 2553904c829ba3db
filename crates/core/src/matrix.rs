use crate::DimensionError;

/// A dense square matrix of `f64`, stored row-major.
///
/// The empty `0×0` matrix is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    dim: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates an `n×n` matrix from a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::BufferLength`] if `data` is not `n * n` long,
    /// reporting `usize::MAX` as the expected length when `n * n` overflows.
    pub fn new(dim: usize, data: Vec<f64>) -> Result<Self, DimensionError> {
        let expected = dim.checked_mul(dim).unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(DimensionError::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { dim, data })
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Ragged`] if any row length differs from the
    /// number of rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, DimensionError> {
        let dim = rows.len();
        let mut data = Vec::with_capacity(dim * dim);

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != dim {
                return Err(DimensionError::Ragged {
                    row,
                    len: values.len(),
                    expected: dim,
                });
            }
            data.extend_from_slice(values);
        }

        Ok(Self { dim, data })
    }

    /// Returns the identity matrix of size `n`.
    #[must_use]
    pub fn identity(dim: usize) -> Self {
        let mut data = vec![0.0; dim * dim];
        for i in 0..dim {
            data[i * dim + i] = 1.0;
        }
        Self { dim, data }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns `true` for the `0×0` matrix.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.dim()`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> {
        // `chunks_exact(0)` panics, so the empty matrix yields no rows.
        self.data.chunks_exact(self.dim.max(1)).take(self.dim)
    }

    /// Iterates over the diagonal entries.
    pub fn diagonal(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.dim).map(|i| self.data[i * self.dim + i])
    }

    /// Computes the matrix-vector product `A·x`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::VectorLength`] if `x` does not have `n` entries.
    pub fn mul_vec(&self, x: &[f64]) -> Result<Vec<f64>, DimensionError> {
        DimensionError::check_len("x", x, self.dim)?;
        Ok(self.rows().map(|row| dot(row, x)).collect())
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(a, b)| a * b).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_rows() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).expect("square");

        assert_eq!(m.dim(), 2);
        assert_eq!(m.row(1), &[3.0, 4.0]);
        assert_eq!(m.row(0), &[1.0, 2.0]);
        assert_eq!(m.diagonal().collect::<Vec<_>>(), vec![1.0, 4.0]);
    }

    #[test]
    fn rejects_ragged_rows() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];

        let result = Matrix::from_rows(&rows);

        assert_eq!(
            result,
            Err(DimensionError::Ragged {
                row: 1,
                len: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn rejects_non_square_rows() {
        let result = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert!(matches!(result, Err(DimensionError::Ragged { row: 0, .. })));
    }

    #[test]
    fn rejects_wrong_buffer_length() {
        let result = Matrix::new(2, vec![1.0, 2.0, 3.0]);
        assert_eq!(
            result,
            Err(DimensionError::BufferLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn rejects_overflowing_dimension() {
        let result = Matrix::new(1usize << 32, vec![]);
        assert_eq!(
            result,
            Err(DimensionError::BufferLength {
                expected: usize::MAX,
                actual: 0
            })
        );

        let result = Matrix::new(usize::MAX, vec![0.0; 4]);
        assert!(matches!(result, Err(DimensionError::BufferLength { actual: 4, .. })));
    }

    #[test]
    fn empty_matrix_has_no_rows() {
        let rows: [[f64; 0]; 0] = [];
        let m = Matrix::from_rows(&rows).expect("empty is square");

        assert!(m.is_empty());
        assert_eq!(m.rows().count(), 0);
        assert_eq!(m.mul_vec(&[]), Ok(vec![]));
    }

    #[test]
    fn multiplies_vector() {
        let m = Matrix::identity(3);
        assert_eq!(m.mul_vec(&[1.0, -2.0, 3.5]), Ok(vec![1.0, -2.0, 3.5]));

        let m = Matrix::from_rows(&[[2.0, 1.0], [0.0, -1.0]]).expect("square");
        assert_eq!(m.mul_vec(&[1.0, 2.0]), Ok(vec![4.0, -2.0]));
    }
}
