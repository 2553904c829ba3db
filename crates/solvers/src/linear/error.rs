use relax_core::DimensionError;
use thiserror::Error;

/// Errors that can occur before a relaxation solver starts sweeping.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("dimension mismatch: {0}")]
    Dimension(#[from] DimensionError),

    /// A diagonal entry is zero, so row `row` cannot be relaxed.
    #[error("zero diagonal entry in row {row}")]
    ZeroPivot { row: usize },
}
