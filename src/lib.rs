//! matdot: matrix–vector dot product with explicit dimension checks
//!
//! This crate multiplies a matrix by a vector, row by row, and reports incompatible
//! shapes as a [`MatDotError::DimensionMismatch`] instead of a sentinel value. Matrices
//! may be row-of-rows slices (`Vec<Vec<T>>`, `&[[T; N]]`, ...) or dense `faer::Mat`.

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;

// Re-exports for convenience
pub use crate::config::{DotOptions, RowCheck};
pub use crate::core::{MatDotVector, MatShape, Number};
pub use crate::error::MatDotError;
pub use crate::matrix::{matrix_dot_vector, matrix_dot_vector_with};
