use bsmat_core::validation::{check_index, check_seed_len, check_window};
use bsmat_core::{
    BsmatError, MatrixOperations, MatrixWire, Result, SparseMatrix, SparseVector,
};

use super::{DualMap, MapVector};
use crate::compact::CompactMatrix;

/// GF(2) matrix stored as a [`DualMap`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MapMatrix {
    rows: usize,
    cols: usize,
    map: DualMap,
}

impl MapMatrix {
    /// Create an all-zero matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            map: DualMap::new(),
        }
    }

    /// Create an all-zero matrix sized for about `entries` set bits
    pub fn with_capacity(rows: usize, cols: usize, entries: usize) -> Self {
        Self {
            rows,
            cols,
            map: DualMap::with_capacity(entries.min(rows), entries.min(cols)),
        }
    }

    /// Create a matrix from row-major dense values; odd values are set bits
    pub fn from_values(rows: usize, cols: usize, values: &[u8]) -> Result<Self> {
        let cells = rows
            .checked_mul(cols)
            .ok_or(BsmatError::InvalidArgument("matrix cell count overflows"))?;
        check_seed_len(values.len(), cells)?;
        let mut m = Self::new(rows, cols);
        for (i, v) in values.iter().enumerate() {
            if v % 2 == 1 {
                m.map.insert(i / cols, i % cols);
            }
        }
        Ok(m)
    }

    /// Create the `size x size` identity
    pub fn identity(size: usize) -> Self {
        let mut m = Self::new(size, size);
        for i in 0..size {
            m.map.insert(i, i);
        }
        m
    }

    /// Copy any matrix into the map form
    pub fn copy_from(m: &dyn SparseMatrix) -> Self {
        let (rows, cols) = m.dims();
        let mut out = Self::new(rows, cols);
        for (r, c) in m.nonzero_entries() {
            out.map.insert(r, c);
        }
        out
    }

    /// Create a `1 x len` matrix holding the bits of `v`
    pub fn from_vector(v: &dyn SparseVector) -> Self {
        let mut out = Self::new(1, v.len());
        for c in v.nonzero_indices() {
            out.map.insert(0, c);
        }
        out
    }

    /// Convert to the wire representation
    pub fn to_wire(&self) -> MatrixWire {
        CompactMatrix::copy_from(self).into_wire()
    }

    /// Rebuild from a wire payload
    pub fn from_wire(wire: MatrixWire) -> Result<Self> {
        Ok(Self::copy_from(&CompactMatrix::from_wire(wire)?))
    }
}

impl SparseMatrix for MapMatrix {
    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn bit(&self, row: usize, col: usize) -> bool {
        self.map.contains(row, col)
    }

    fn put_bit(&mut self, row: usize, col: usize, value: bool) {
        self.map.put(row, col, value);
    }

    fn row_support(&self, row: usize) -> Vec<usize> {
        self.map.row(row)
    }

    fn column_support(&self, col: usize) -> Vec<usize> {
        self.map.column(col)
    }

    fn nnz(&self) -> usize {
        self.map.nnz()
    }

    fn nonzero_entries(&self) -> Vec<(usize, usize)> {
        self.map.entries()
    }

    fn zeroize(&mut self) {
        self.map.clear();
    }

    fn swap_rows(&mut self, i1: usize, i2: usize) -> Result<()> {
        check_index(i1, self.rows)?;
        check_index(i2, self.rows)?;
        if i1 != i2 {
            self.map.swap_rows(i1, i2);
        }
        Ok(())
    }
}

impl MatrixOperations for MapMatrix {
    type Vector = MapVector;

    fn row(&self, row: usize) -> Result<MapVector> {
        check_index(row, self.rows)?;
        let mut v = MapVector::new(self.cols);
        for c in self.map.row(row) {
            v.put_bit(c, true);
        }
        Ok(v)
    }

    fn column(&self, col: usize) -> Result<MapVector> {
        check_index(col, self.cols)?;
        let mut v = MapVector::new(self.rows);
        for r in self.map.column(col) {
            v.put_bit(r, true);
        }
        Ok(v)
    }

    fn slice(&self, row: usize, col: usize, rows: usize, cols: usize) -> Result<Self> {
        check_window(row, rows, self.rows)?;
        check_window(col, cols, self.cols)?;
        let mut out = Self::new(rows, cols);
        for r in row..row + rows {
            if self.map.row_len(r) == 0 {
                continue;
            }
            for c in self.map.row(r) {
                if c >= col && c < col + cols {
                    out.map.insert(r - row, c - col);
                }
            }
        }
        Ok(out)
    }

    fn t(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
            map: self.map.transposed(),
        }
    }
}

impl std::fmt::Display for MapMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::render_matrix(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsmat_core::VectorOperations;

    #[test]
    fn test_set_zero_prunes() {
        let mut m = MapMatrix::new(3, 3);
        m.set(1, 1, 1).unwrap();
        m.set(1, 1, 0).unwrap();
        assert_eq!(m, MapMatrix::new(3, 3));
        assert!(m.is_zero());
    }

    #[test]
    fn test_swap_rows() {
        let mut m = MapMatrix::from_values(2, 2, &[1, 0, 0, 1]).unwrap();
        m.swap_rows(0, 1).unwrap();
        assert_eq!(m, MapMatrix::from_values(2, 2, &[0, 1, 1, 0]).unwrap());
        assert_eq!(m.column_support(0), vec![1]);
    }

    #[test]
    fn test_add_rows_and_columns() {
        let mut m = MapMatrix::identity(3);
        m.add_rows(0, 1, 2).unwrap();
        assert_eq!(m.row_support(2), vec![0, 1]);
        m.add_columns(0, 1, 0).unwrap();
        assert_eq!(m.column_support(0), vec![0, 1]);
        assert_eq!(m.column_support(1), vec![1, 2]);
    }

    #[test]
    fn test_transpose_and_slice() {
        let m = MapMatrix::identity(8);
        let t = m.slice(3, 0, 4, 4).unwrap().t();
        assert_eq!(t.nonzero_entries(), vec![(3, 0)]);
        assert_eq!(t.t().t(), t);
    }

    #[test]
    fn test_row_column() {
        let m = MapMatrix::from_values(2, 3, &[0, 1, 1, 1, 0, 1]).unwrap();
        assert_eq!(m.row(1).unwrap().nonzero_indices(), vec![0, 2]);
        assert_eq!(m.column(2).unwrap().nonzero_indices(), vec![0, 1]);
        let part = m.row(0).unwrap().slice(1, 2).unwrap();
        assert_eq!(part.hamming_weight(), 2);
    }

    #[test]
    fn test_wire_round_trip() {
        let m = MapMatrix::from_values(2, 2, &[1, 1, 0, 1]).unwrap();
        let wire = m.to_wire();
        assert_eq!(wire.row_indices, vec![0, 0, 1]);
        assert_eq!(wire.col_indices, vec![0, 1, 1]);
        assert_eq!(MapMatrix::from_wire(wire).unwrap(), m);
    }
}
