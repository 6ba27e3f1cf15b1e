//! Core vector abstraction traits

use alloc::vec::Vec;

use super::matrix::SparseMatrix;
use super::region::StorageRegion;
use crate::ops;
use crate::validation::check_index;
use crate::Result;

/// Object-safe GF(2) vector contract
pub trait SparseVector {
    /// Get the vector length
    fn len(&self) -> usize;

    /// Read a bit. The index must lie inside `len()`.
    fn bit(&self, index: usize) -> bool;

    /// Write a bit. The index must lie inside `len()`.
    fn put_bit(&mut self, index: usize, value: bool);

    /// Sorted positions of the set bits
    fn nonzero_indices(&self) -> Vec<usize>;

    /// The shared-store rectangle this value covers, if any
    fn storage_region(&self) -> Option<StorageRegion> {
        None
    }

    /// Whether the vector has length zero
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the value at `index`
    fn at(&self, index: usize) -> Result<u8> {
        check_index(index, self.len())?;
        Ok(self.bit(index) as u8)
    }

    /// Set the value at `index`; odd values set the bit, even clear it
    fn set(&mut self, index: usize, value: u8) -> Result<()> {
        check_index(index, self.len())?;
        self.put_bit(index, value % 2 == 1);
        Ok(())
    }

    /// Number of set bits
    fn hamming_weight(&self) -> usize {
        self.nonzero_indices().len()
    }

    /// Whether every bit is zero
    fn is_zero(&self) -> bool {
        self.hamming_weight() == 0
    }

    /// Number of positions where the two vectors differ
    fn hamming_distance(&self, other: &dyn SparseVector) -> Result<usize> {
        ops::vector::hamming_distance(self, other)
    }

    /// Inner product mod 2
    fn dot(&self, other: &dyn SparseVector) -> Result<u8> {
        ops::vector::dot(self, other)
    }

    /// First set bit at or after `from`
    fn next_set(&self, from: usize) -> Result<Option<usize>> {
        check_index(from, self.len())?;
        let indices = self.nonzero_indices();
        let pos = crate::index::locate(&indices, from);
        Ok(indices.get(pos).copied())
    }

    /// Same length and same set bits
    fn equals(&self, other: &dyn SparseVector) -> bool {
        self.len() == other.len() && self.nonzero_indices() == other.nonzero_indices()
    }

    /// Clear every bit
    fn zeroize(&mut self) {
        for i in self.nonzero_indices() {
            self.put_bit(i, false);
        }
    }

    /// Flip every bit in place
    fn negate(&mut self) {
        for i in 0..self.len() {
            let v = self.bit(i);
            self.put_bit(i, !v);
        }
    }

    /// Overwrite `[offset, offset + a.len())` with the bits of `a`
    fn set_vec(&mut self, a: &dyn SparseVector, offset: usize) -> Result<()> {
        ops::vector::set_vec(self, a, offset)
    }

    /// Store `a + b` (mod 2); identical to `xor`
    fn add(&mut self, a: &dyn SparseVector, b: &dyn SparseVector) -> Result<()> {
        self.xor(a, b)
    }

    /// Store the piecewise AND of `a` and `b`
    fn and(&mut self, a: &dyn SparseVector, b: &dyn SparseVector) -> Result<()> {
        ops::vector::elementwise(self, a, b, |x, y| x & y)
    }

    /// Store the piecewise OR of `a` and `b`
    fn or(&mut self, a: &dyn SparseVector, b: &dyn SparseVector) -> Result<()> {
        ops::vector::elementwise(self, a, b, |x, y| x | y)
    }

    /// Store the piecewise XOR of `a` and `b`
    fn xor(&mut self, a: &dyn SparseVector, b: &dyn SparseVector) -> Result<()> {
        ops::vector::elementwise(self, a, b, |x, y| x ^ y)
    }

    /// Store the matrix-vector product `mat * vec`
    fn mat_mul(&mut self, mat: &dyn SparseMatrix, vec: &dyn SparseVector) -> Result<()> {
        ops::vector::mat_mul(self, mat, vec)
    }

    /// Store the vector-matrix product `vec * mat`
    fn mul_mat(&mut self, vec: &dyn SparseVector, mat: &dyn SparseMatrix) -> Result<()> {
        ops::vector::mul_mat(self, vec, mat)
    }
}

/// Engine-typed vector operations
pub trait VectorOperations: SparseVector + Sized {
    /// The `len` bits starting at `start`
    fn slice(&self, start: usize, len: usize) -> Result<Self>;
}
