//! Matrix construction errors.

use thiserror::Error;

/// Errors that can occur when building or querying a matrix.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Rows of different lengths.
    #[error("row {row} has {found} entries, expected {expected}")]
    Ragged {
        /// Index of the first offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    #[error("expected a square matrix, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },
}
