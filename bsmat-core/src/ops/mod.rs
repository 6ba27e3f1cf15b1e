//! Representation-independent algorithms
//!
//! Each function is written against the required primitives of the
//! contract traits (`dims`, `bit`, `put_bit`, supports) and backs a default
//! trait method. Every function validates all of its arguments before the
//! first write, and reads every operand value it needs before writing when
//! the destination may share storage with that operand.

pub mod matrix;
pub mod vector;

use crate::traits::{regions_overlap, StorageRegion};
use crate::{BsmatError, Result};

/// Reject a destination whose storage overlaps any operand's
pub fn check_disjoint(
    dest: Option<StorageRegion>,
    operands: &[Option<StorageRegion>],
) -> Result<()> {
    if dest.is_none() {
        return Ok(());
    }
    for operand in operands {
        if regions_overlap(dest.clone(), operand.clone()) {
            return Err(BsmatError::SelfAliasViolation);
        }
    }
    Ok(())
}

/// Minimal dense implementations for exercising the default methods
#[cfg(test)]
pub(crate) mod dense {
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::traits::{SparseMatrix, SparseVector};

    pub struct DenseMatrix {
        pub rows: usize,
        pub cols: usize,
        pub bits: Vec<bool>,
    }

    impl DenseMatrix {
        pub fn from_values(rows: usize, cols: usize, values: &[u8]) -> Self {
            let mut bits = vec![false; rows * cols];
            for (i, v) in values.iter().enumerate() {
                bits[i] = v % 2 == 1;
            }
            DenseMatrix { rows, cols, bits }
        }
    }

    impl SparseMatrix for DenseMatrix {
        fn dims(&self) -> (usize, usize) {
            (self.rows, self.cols)
        }
        fn bit(&self, row: usize, col: usize) -> bool {
            self.bits[row * self.cols + col]
        }
        fn put_bit(&mut self, row: usize, col: usize, value: bool) {
            self.bits[row * self.cols + col] = value;
        }
        fn row_support(&self, row: usize) -> Vec<usize> {
            (0..self.cols).filter(|&c| self.bit(row, c)).collect()
        }
        fn column_support(&self, col: usize) -> Vec<usize> {
            (0..self.rows).filter(|&r| self.bit(r, col)).collect()
        }
    }

    pub struct DenseVector {
        pub bits: Vec<bool>,
    }

    impl DenseVector {
        pub fn from_values(values: &[u8]) -> Self {
            DenseVector {
                bits: values.iter().map(|v| v % 2 == 1).collect(),
            }
        }
    }

    impl SparseVector for DenseVector {
        fn len(&self) -> usize {
            self.bits.len()
        }
        fn bit(&self, index: usize) -> bool {
            self.bits[index]
        }
        fn put_bit(&mut self, index: usize, value: bool) {
            self.bits[index] = value;
        }
        fn nonzero_indices(&self) -> Vec<usize> {
            (0..self.bits.len()).filter(|&i| self.bits[i]).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ops::Range;

    fn region(store: usize, rows: Range<usize>, cols: Range<usize>) -> Option<StorageRegion> {
        Some(StorageRegion { store, rows, cols })
    }

    #[test]
    fn test_check_disjoint() {
        assert_eq!(check_disjoint(None, &[region(1, 0..2, 0..2)]), Ok(()));
        assert_eq!(
            check_disjoint(region(1, 0..2, 0..2), &[None, region(1, 2..4, 0..2)]),
            Ok(())
        );
        assert_eq!(
            check_disjoint(region(1, 0..2, 0..2), &[region(1, 1..4, 1..2)]),
            Err(BsmatError::SelfAliasViolation)
        );
    }
}
