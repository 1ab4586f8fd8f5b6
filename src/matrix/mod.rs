//! Matrix module: the row-major dot-product kernel.

pub mod dense;
pub use dense::{matrix_dot_vector, matrix_dot_vector_with};
