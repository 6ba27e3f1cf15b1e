//! Core matrix abstraction traits
//!
//! This module defines the contract every storage engine satisfies. The
//! required methods are the representation-specific primitives; everything
//! else has a default built from them in [`crate::ops`], which engines
//! override where their layout allows something cheaper.

use alloc::vec::Vec;

use super::region::StorageRegion;
use super::vector::SparseVector;
use crate::ops;
use crate::validation::check_position;
use crate::Result;

/// Object-safe GF(2) matrix contract
///
/// Values are bits: `at` returns 0 or 1, and `set` treats odd values as 1
/// and even values as 0. Operands of binary operations may come from any
/// engine; results depend only on the logical `(row, col) -> bit` mapping.
pub trait SparseMatrix {
    /// Get matrix dimensions as (rows, cols)
    fn dims(&self) -> (usize, usize);

    /// Read a bit. The position must lie inside `dims()`.
    fn bit(&self, row: usize, col: usize) -> bool;

    /// Write a bit. The position must lie inside `dims()`.
    fn put_bit(&mut self, row: usize, col: usize, value: bool);

    /// Sorted column indices of the set bits in `row` (in range)
    fn row_support(&self, row: usize) -> Vec<usize>;

    /// Sorted row indices of the set bits in `col` (in range)
    fn column_support(&self, col: usize) -> Vec<usize>;

    /// The shared-store rectangle this value covers, if any
    fn storage_region(&self) -> Option<StorageRegion> {
        None
    }

    /// Get the number of set bits
    fn nnz(&self) -> usize {
        (0..self.dims().0).map(|r| self.row_support(r).len()).sum()
    }

    /// All set positions in row-major order
    fn nonzero_entries(&self) -> Vec<(usize, usize)> {
        let mut entries = Vec::new();
        for r in 0..self.dims().0 {
            entries.extend(self.row_support(r).into_iter().map(|c| (r, c)));
        }
        entries
    }

    /// Whether every bit is zero
    fn is_zero(&self) -> bool {
        self.nnz() == 0
    }

    /// Get the value at `(row, col)`
    fn at(&self, row: usize, col: usize) -> Result<u8> {
        check_position(row, col, self.dims())?;
        Ok(self.bit(row, col) as u8)
    }

    /// Set the value at `(row, col)`; odd values set the bit, even clear it
    fn set(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        check_position(row, col, self.dims())?;
        self.put_bit(row, col, value % 2 == 1);
        Ok(())
    }

    /// Same shape and same set bits
    fn equals(&self, other: &dyn SparseMatrix) -> bool {
        ops::matrix::equals(self, other)
    }

    /// Clear every bit
    fn zeroize(&mut self) {
        ops::matrix::zeroize(self)
    }

    /// Clear the bits in the `rows x cols` block starting at `(row, col)`
    fn zeroize_range(&mut self, row: usize, col: usize, rows: usize, cols: usize) -> Result<()> {
        ops::matrix::zeroize_range(self, row, col, rows, cols)
    }

    /// Replace row `row` with the bits of `vec`
    fn set_row(&mut self, row: usize, vec: &dyn SparseVector) -> Result<()> {
        ops::matrix::set_row(self, row, vec)
    }

    /// Replace column `col` with the bits of `vec`
    fn set_column(&mut self, col: usize, vec: &dyn SparseVector) -> Result<()> {
        ops::matrix::set_column(self, col, vec)
    }

    /// Overwrite the block at `(row_offset, col_offset)` with `a`
    fn set_matrix(&mut self, a: &dyn SparseMatrix, row_offset: usize, col_offset: usize) -> Result<()> {
        ops::matrix::set_matrix(self, a, row_offset, col_offset)
    }

    /// Exchange two rows
    fn swap_rows(&mut self, i1: usize, i2: usize) -> Result<()> {
        ops::matrix::swap_rows(self, i1, i2)
    }

    /// Exchange two columns
    fn swap_columns(&mut self, j1: usize, j2: usize) -> Result<()> {
        ops::matrix::swap_columns(self, j1, j2)
    }

    /// Replace row `dest` with `row(i1) XOR row(i2)`
    ///
    /// Rows are read before `dest` is written, so `dest` may be `i1` or `i2`.
    fn add_rows(&mut self, i1: usize, i2: usize, dest: usize) -> Result<()> {
        ops::matrix::add_rows(self, i1, i2, dest)
    }

    /// Replace column `dest` with `column(j1) XOR column(j2)`
    fn add_columns(&mut self, j1: usize, j2: usize, dest: usize) -> Result<()> {
        ops::matrix::add_columns(self, j1, j2, dest)
    }

    /// Store `a * b` (mod 2) in this matrix
    fn mul(&mut self, a: &dyn SparseMatrix, b: &dyn SparseMatrix) -> Result<()> {
        ops::matrix::mul(self, a, b)
    }

    /// Store `a + b` (mod 2) in this matrix; identical to `xor`
    fn add(&mut self, a: &dyn SparseMatrix, b: &dyn SparseMatrix) -> Result<()> {
        self.xor(a, b)
    }

    /// Store the piecewise AND of `a` and `b`
    fn and(&mut self, a: &dyn SparseMatrix, b: &dyn SparseMatrix) -> Result<()> {
        ops::matrix::elementwise(self, a, b, |x, y| x & y)
    }

    /// Store the piecewise OR of `a` and `b`
    fn or(&mut self, a: &dyn SparseMatrix, b: &dyn SparseMatrix) -> Result<()> {
        ops::matrix::elementwise(self, a, b, |x, y| x | y)
    }

    /// Store the piecewise XOR of `a` and `b`
    fn xor(&mut self, a: &dyn SparseMatrix, b: &dyn SparseMatrix) -> Result<()> {
        ops::matrix::elementwise(self, a, b, |x, y| x ^ y)
    }

    /// Flip every bit in place
    fn negate(&mut self) {
        ops::matrix::negate(self)
    }
}

/// Engine-typed operations returning values of the same engine
///
/// Whether the returned value shares storage with `self` is engine
/// specific: copying engines return independent values, the windowed
/// engine returns views.
pub trait MatrixOperations: SparseMatrix + Sized {
    /// The vector type rows and columns are extracted as
    type Vector: SparseVector;

    /// Extract row `row` as a vector of length `cols`
    fn row(&self, row: usize) -> Result<Self::Vector>;

    /// Extract column `col` as a vector of length `rows`
    fn column(&self, col: usize) -> Result<Self::Vector>;

    /// The `rows x cols` block starting at `(row, col)`
    fn slice(&self, row: usize, col: usize, rows: usize, cols: usize) -> Result<Self>;

    /// The transpose
    fn t(&self) -> Self;
}
