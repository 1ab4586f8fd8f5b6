//! Options controlling how strictly matrix shapes are validated.

pub mod options;
pub use options::{DotOptions, RowCheck};
