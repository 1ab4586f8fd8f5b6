//! Storage wrappers: trait implementations for row-of-rows matrices and `faer::Mat`.
//!
//! Row-of-rows storage (`Vec<Vec<T>>`, `[Vec<T>]`, `[[T; N]]`, `[&[T]]`) routes through the
//! kernel in [`crate::matrix::dense`]. `faer::Mat` and `faer::MatRef` apply the same
//! empty-matrix and column-count policy through their [`MatShape`] and accumulate with
//! the same left-to-right loop.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use std::ops::Mul;

use faer::{Mat, MatRef};
use num_traits::Zero;

use crate::config::DotOptions;
use crate::core::traits::{MatDotVector, MatShape};
use crate::error::MatDotError;
use crate::matrix::dense::matrix_dot_vector_with;

impl<T, R> MatDotVector<T> for [R]
where
    T: Copy + Zero + Mul<Output = T>,
    R: AsRef<[T]>,
{
    fn dot_vector_with(&self, x: &[T], opts: &DotOptions) -> Result<Vec<T>, MatDotError> {
        matrix_dot_vector_with(self, x, opts)
    }
}

impl<T, R> MatDotVector<T> for Vec<R>
where
    T: Copy + Zero + Mul<Output = T>,
    R: AsRef<[T]>,
{
    fn dot_vector_with(&self, x: &[T], opts: &DotOptions) -> Result<Vec<T>, MatDotError> {
        matrix_dot_vector_with(self.as_slice(), x, opts)
    }
}

/// Empty-matrix and column-count policy for storages that know their own shape.
fn check_shape<M: MatShape + ?Sized>(a: &M, len: usize) -> Result<(), MatDotError> {
    if a.nrows() == 0 {
        return if len == 0 {
            Ok(())
        } else {
            Err(MatDotError::mismatch(0, 0, len))
        };
    }
    if a.ncols() != len {
        return Err(MatDotError::mismatch(0, a.ncols(), len));
    }
    Ok(())
}

/// Computes `y = A * x` for a borrowed dense view (`faer::MatRef`).
///
/// A matrix with zero rows only accepts an empty `x`, whatever its column count.
impl<'a, T> MatDotVector<T> for MatRef<'a, T>
where
    T: Copy + Zero + Mul<Output = T>,
{
    fn dot_vector_with(&self, x: &[T], _opts: &DotOptions) -> Result<Vec<T>, MatDotError> {
        let (nrows, ncols) = (MatShape::nrows(self), MatShape::ncols(self));
        log::trace!("matdot: faer {nrows}x{ncols} · {}", x.len());
        check_shape(self, x.len())?;
        let mut y = Vec::with_capacity(nrows);
        for i in 0..nrows {
            let mut acc = T::zero();
            for j in 0..ncols {
                acc = acc + self[(i, j)] * x[j];
            }
            y.push(acc);
        }
        Ok(y)
    }
}

/// Computes `y = A * x` for an owned dense `faer::Mat`.
impl<T> MatDotVector<T> for Mat<T>
where
    T: Copy + Zero + Mul<Output = T>,
{
    fn dot_vector_with(&self, x: &[T], opts: &DotOptions) -> Result<Vec<T>, MatDotError> {
        self.as_ref().dot_vector_with(x, opts)
    }
}

impl<T> MatShape for [Vec<T>] {
    fn nrows(&self) -> usize {
        self.len()
    }
    fn ncols(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }
}

impl<T> MatShape for Vec<Vec<T>> {
    fn nrows(&self) -> usize {
        self.len()
    }
    fn ncols(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }
}

impl<T, const N: usize> MatShape for [[T; N]] {
    fn nrows(&self) -> usize {
        self.len()
    }
    fn ncols(&self) -> usize {
        if self.is_empty() { 0 } else { N }
    }
}

impl<'a, T> MatShape for [&'a [T]] {
    fn nrows(&self) -> usize {
        self.len()
    }
    fn ncols(&self) -> usize {
        self.first().map_or(0, |row| row.len())
    }
}

impl<'a, T> MatShape for MatRef<'a, T> {
    fn nrows(&self) -> usize {
        let a: MatRef<'a, T> = *self;
        a.nrows()
    }
    fn ncols(&self) -> usize {
        let a: MatRef<'a, T> = *self;
        a.ncols()
    }
}

impl<T> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}
