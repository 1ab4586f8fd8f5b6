//! Core traits and scalar types shared by every matrix storage.

pub mod number;
pub mod traits;
pub mod wrappers;

pub use number::Number;
pub use traits::{MatDotVector, MatShape};
