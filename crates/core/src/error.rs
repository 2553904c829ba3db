use thiserror::Error;

/// Errors raised when matrix and vector shapes do not agree.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    /// A row of the matrix does not match the row count.
    #[error("row {row} has {len} entries, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A flat buffer is not `n * n` long.
    #[error("matrix buffer has {actual} entries, expected {expected}")]
    BufferLength { expected: usize, actual: usize },

    /// A vector does not have one entry per matrix row.
    #[error("vector `{name}` has {actual} entries, expected {expected}")]
    VectorLength {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl DimensionError {
    /// Returns an error unless `vector` has exactly `expected` entries.
    pub(crate) fn check_len(
        name: &'static str,
        vector: &[f64],
        expected: usize,
    ) -> Result<(), Self> {
        if vector.len() == expected {
            Ok(())
        } else {
            Err(Self::VectorLength {
                name,
                expected,
                actual: vector.len(),
            })
        }
    }
}
