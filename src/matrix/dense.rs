//! Row-major matrix–vector product.
//!
//! A matrix is any slice of rows, where each row is viewable as `&[T]`. The product
//! `y = A · x` has one entry per row, in row order, each accumulated left-to-right
//! from `T::zero()` as `acc + a[i][j] * x[j]`.
//!
//! Shape policy:
//! - a matrix with no rows has zero columns, so it accepts only an empty vector and
//!   yields an empty result;
//! - otherwise the first row's width must equal `x.len()`;
//! - with [`RowCheck::EveryRow`] every row's width must equal `x.len()`.
//!
//! Under the default [`RowCheck::FirstRow`] a jagged matrix does not panic: each row
//! is paired with `x` up to the shorter of the two.

use std::ops::Mul;

use num_traits::Zero;

use crate::config::{DotOptions, RowCheck};
use crate::error::MatDotError;

/// Multiply `matrix` by `vector`, checking only the first row's width.
///
/// ```
/// use matdot::{matrix_dot_vector, MatDotError};
///
/// assert_eq!(matrix_dot_vector(&[[1, 2], [2, 4]], &[1, 2]), Ok(vec![5, 10]));
/// assert!(matches!(
///     matrix_dot_vector(&[[1, 2, 3], [4, 5, 6]], &[1, 2]),
///     Err(MatDotError::DimensionMismatch { .. })
/// ));
/// ```
pub fn matrix_dot_vector<T, R>(matrix: &[R], vector: &[T]) -> Result<Vec<T>, MatDotError>
where
    T: Copy + Zero + Mul<Output = T>,
    R: AsRef<[T]>,
{
    matrix_dot_vector_with(matrix, vector, &DotOptions::default())
}

/// Multiply `matrix` by `vector` under the given shape-validation options.
pub fn matrix_dot_vector_with<T, R>(
    matrix: &[R],
    vector: &[T],
    opts: &DotOptions,
) -> Result<Vec<T>, MatDotError>
where
    T: Copy + Zero + Mul<Output = T>,
    R: AsRef<[T]>,
{
    let len = vector.len();
    log::trace!(
        "matdot: {} rows · vector of length {len} ({:?})",
        matrix.len(),
        opts.check_rows
    );

    let Some(first) = matrix.first() else {
        return if len == 0 {
            Ok(Vec::new())
        } else {
            Err(MatDotError::mismatch(0, 0, len))
        };
    };

    let cols = first.as_ref().len();
    if cols != len {
        return Err(MatDotError::mismatch(0, cols, len));
    }

    if opts.check_rows == RowCheck::EveryRow {
        if let Some((i, row)) = matrix
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, row)| row.as_ref().len() != len)
        {
            return Err(MatDotError::mismatch(i, row.as_ref().len(), len));
        }
    }

    Ok(matrix.iter().map(|row| row_dot(row.as_ref(), vector)).collect())
}

/// Σ row[i] · x[i], left to right.
fn row_dot<T>(row: &[T], x: &[T]) -> T
where
    T: Copy + Zero + Mul<Output = T>,
{
    row.iter()
        .zip(x)
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
}
