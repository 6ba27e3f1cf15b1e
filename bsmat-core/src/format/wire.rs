//! Canonical wire representation
//!
//! Every engine reduces to these structs on the way out and rebuilds its
//! native representation from them on the way in. Field names follow the
//! JSON snapshot format (`Rows`, `Cols`, `RowIndices`, `ColIndices`,
//! `Length`, `Indices`).

use alloc::vec::Vec;

use crate::validation::{validate_coordinates, validate_indices};
use crate::BsmatError;

/// Coordinate form of a matrix
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct MatrixWire {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Row index of every set bit, non-decreasing
    pub row_indices: Vec<usize>,
    /// Column index of every set bit, increasing within a row
    pub col_indices: Vec<usize>,
}

impl MatrixWire {
    /// Check the payload against the coordinate-form invariant
    pub fn validate(&self) -> Result<(), BsmatError> {
        validate_coordinates(self.rows, self.cols, &self.row_indices, &self.col_indices)
    }

    /// Number of set bits
    pub fn nnz(&self) -> usize {
        self.row_indices.len()
    }
}

/// Sorted index form of a vector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct VectorWire {
    /// Vector length
    pub length: usize,
    /// Positions of the set bits, increasing
    pub indices: Vec<usize>,
}

impl VectorWire {
    /// Check the payload against the sorted-unique invariant
    pub fn validate(&self) -> Result<(), BsmatError> {
        validate_indices(self.length, &self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_matrix_wire_validate() {
        let wire = MatrixWire {
            rows: 2,
            cols: 2,
            row_indices: vec![0, 1],
            col_indices: vec![0, 1],
        };
        assert_eq!(wire.validate(), Ok(()));
        assert_eq!(wire.nnz(), 2);

        let broken = MatrixWire {
            row_indices: vec![1, 0],
            ..wire
        };
        assert!(broken.validate().is_err());
    }

    #[test]
    fn test_vector_wire_validate() {
        assert_eq!(VectorWire::default().validate(), Ok(()));
        let wire = VectorWire {
            length: 3,
            indices: vec![0, 3],
        };
        assert!(wire.validate().is_err());
    }
}
