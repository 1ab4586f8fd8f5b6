//! API options for the matrix–vector product.
//!
//! This module provides the `DotOptions` struct, which selects how much of
//! the matrix is inspected before multiplying. By default only the first
//! row is compared against the vector length; `RowCheck::EveryRow` also
//! rejects jagged matrices.

/// Which rows are compared against the vector length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowCheck {
    /// Only the first row's width is checked.
    #[default]
    FirstRow,
    /// Every row's width must equal the vector length.
    EveryRow,
}

/// Shape-validation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DotOptions {
    /// Row-width checking policy (first, every)
    pub check_rows: RowCheck,
}

impl DotOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject matrices whose rows are not all as wide as the vector.
    pub fn strict() -> Self {
        Self {
            check_rows: RowCheck::EveryRow,
        }
    }

    pub fn with_row_check(mut self, check_rows: RowCheck) -> Self {
        self.check_rows = check_rows;
        self
    }
}
