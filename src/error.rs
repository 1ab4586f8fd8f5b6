use thiserror::Error;

// Unified error type for matdot

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatDotError {
    /// Row width and vector length disagree. An empty matrix is treated as
    /// having zero columns, so it only accepts an empty vector.
    #[error("dimension mismatch: row {row} has {cols} columns but vector has length {len}")]
    DimensionMismatch { row: usize, cols: usize, len: usize },
}

impl MatDotError {
    pub(crate) fn mismatch(row: usize, cols: usize, len: usize) -> Self {
        log::debug!("matdot: row {row} width {cols} != vector length {len}");
        MatDotError::DimensionMismatch { row, cols, len }
    }
}
