//! Core linear-algebra traits for matdot.

use crate::config::DotOptions;
use crate::error::MatDotError;

/// Matrix–vector product: y = A · x, or a dimension mismatch.
pub trait MatDotVector<T> {
    /// Compute A · x with the given shape-validation options.
    fn dot_vector_with(&self, x: &[T], opts: &DotOptions) -> Result<Vec<T>, MatDotError>;

    /// Compute A · x, checking only the first row against `x`.
    fn dot_vector(&self, x: &[T]) -> Result<Vec<T>, MatDotError> {
        self.dot_vector_with(x, &DotOptions::default())
    }
}

/// Matrix shape queries.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns; zero for a matrix without rows when the storage
    /// cannot say otherwise.
    fn ncols(&self) -> usize;
}
