//! Engine-erased matrices and vectors
//!
//! [`AnyMatrix`] and [`AnyVector`] wrap one value of each engine and
//! forward every contract method to it, so engine-specific fast paths are
//! kept. They are produced by [`EngineConfig`](crate::EngineConfig) when the
//! engine is chosen at runtime.

use bsmat_core::{
    Engine, MatrixOperations, MatrixWire, Result, SparseMatrix, SparseVector, StorageRegion,
    VectorOperations, VectorWire,
};

use crate::compact::{CompactMatrix, CompactVector};
use crate::map::{MapMatrix, MapVector};
use crate::windowed::{WindowedMatrix, WindowedVector};

macro_rules! dispatch {
    ($value:expr, $kind:ident, $inner:ident => $body:expr) => {
        match $value {
            $kind::Compact($inner) => $body,
            $kind::Map($inner) => $body,
            $kind::Windowed($inner) => $body,
        }
    };
}

/// A matrix of any engine
///
/// Equality compares the logical bits, so values of different engines
/// holding the same matrix are equal. Cloning a `Windowed` value yields a
/// handle on the same store; use [`EngineConfig::copy_matrix`](crate::EngineConfig::copy_matrix)
/// for an independent copy.
#[derive(Debug, Clone)]
pub enum AnyMatrix {
    Compact(CompactMatrix),
    Map(MapMatrix),
    Windowed(WindowedMatrix),
}

impl AnyMatrix {
    /// The engine holding the bits
    pub fn engine(&self) -> Engine {
        match self {
            AnyMatrix::Compact(_) => Engine::Compact,
            AnyMatrix::Map(_) => Engine::Map,
            AnyMatrix::Windowed(_) => Engine::Windowed,
        }
    }

    /// Copy out the wire representation
    pub fn to_wire(&self) -> MatrixWire {
        dispatch!(self, AnyMatrix, m => m.to_wire())
    }

    /// Rebuild a wire payload into the given engine
    pub fn from_wire(wire: MatrixWire, engine: Engine) -> Result<Self> {
        let compact = CompactMatrix::from_wire(wire)?;
        Ok(match engine {
            Engine::Compact => AnyMatrix::Compact(compact),
            Engine::Map => AnyMatrix::Map(MapMatrix::copy_from(&compact)),
            Engine::Windowed => AnyMatrix::Windowed(WindowedMatrix::copy_from(&compact)),
        })
    }

    /// Borrow the wrapped value as a trait object
    pub fn as_dyn(&self) -> &dyn SparseMatrix {
        dispatch!(self, AnyMatrix, m => m)
    }
}

impl From<CompactMatrix> for AnyMatrix {
    fn from(m: CompactMatrix) -> Self {
        AnyMatrix::Compact(m)
    }
}

impl From<MapMatrix> for AnyMatrix {
    fn from(m: MapMatrix) -> Self {
        AnyMatrix::Map(m)
    }
}

impl From<WindowedMatrix> for AnyMatrix {
    fn from(m: WindowedMatrix) -> Self {
        AnyMatrix::Windowed(m)
    }
}

impl SparseMatrix for AnyMatrix {
    fn dims(&self) -> (usize, usize) {
        dispatch!(self, AnyMatrix, m => m.dims())
    }

    fn bit(&self, row: usize, col: usize) -> bool {
        dispatch!(self, AnyMatrix, m => m.bit(row, col))
    }

    fn put_bit(&mut self, row: usize, col: usize, value: bool) {
        dispatch!(self, AnyMatrix, m => m.put_bit(row, col, value))
    }

    fn row_support(&self, row: usize) -> Vec<usize> {
        dispatch!(self, AnyMatrix, m => m.row_support(row))
    }

    fn column_support(&self, col: usize) -> Vec<usize> {
        dispatch!(self, AnyMatrix, m => m.column_support(col))
    }

    fn storage_region(&self) -> Option<StorageRegion> {
        dispatch!(self, AnyMatrix, m => m.storage_region())
    }

    fn nnz(&self) -> usize {
        dispatch!(self, AnyMatrix, m => m.nnz())
    }

    fn nonzero_entries(&self) -> Vec<(usize, usize)> {
        dispatch!(self, AnyMatrix, m => m.nonzero_entries())
    }

    fn is_zero(&self) -> bool {
        dispatch!(self, AnyMatrix, m => m.is_zero())
    }

    fn at(&self, row: usize, col: usize) -> Result<u8> {
        dispatch!(self, AnyMatrix, m => m.at(row, col))
    }

    fn set(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        dispatch!(self, AnyMatrix, m => m.set(row, col, value))
    }

    fn equals(&self, other: &dyn SparseMatrix) -> bool {
        dispatch!(self, AnyMatrix, m => m.equals(other))
    }

    fn zeroize(&mut self) {
        dispatch!(self, AnyMatrix, m => m.zeroize())
    }

    fn zeroize_range(&mut self, row: usize, col: usize, rows: usize, cols: usize) -> Result<()> {
        dispatch!(self, AnyMatrix, m => m.zeroize_range(row, col, rows, cols))
    }

    fn set_row(&mut self, row: usize, vec: &dyn SparseVector) -> Result<()> {
        dispatch!(self, AnyMatrix, m => m.set_row(row, vec))
    }

    fn set_column(&mut self, col: usize, vec: &dyn SparseVector) -> Result<()> {
        dispatch!(self, AnyMatrix, m => m.set_column(col, vec))
    }

    fn set_matrix(&mut self, a: &dyn SparseMatrix, row_offset: usize, col_offset: usize) -> Result<()> {
        dispatch!(self, AnyMatrix, m => m.set_matrix(a, row_offset, col_offset))
    }

    fn swap_rows(&mut self, i1: usize, i2: usize) -> Result<()> {
        dispatch!(self, AnyMatrix, m => m.swap_rows(i1, i2))
    }

    fn swap_columns(&mut self, j1: usize, j2: usize) -> Result<()> {
        dispatch!(self, AnyMatrix, m => m.swap_columns(j1, j2))
    }

    fn add_rows(&mut self, i1: usize, i2: usize, dest: usize) -> Result<()> {
        dispatch!(self, AnyMatrix, m => m.add_rows(i1, i2, dest))
    }

    fn add_columns(&mut self, j1: usize, j2: usize, dest: usize) -> Result<()> {
        dispatch!(self, AnyMatrix, m => m.add_columns(j1, j2, dest))
    }

    fn mul(&mut self, a: &dyn SparseMatrix, b: &dyn SparseMatrix) -> Result<()> {
        dispatch!(self, AnyMatrix, m => m.mul(a, b))
    }

    fn add(&mut self, a: &dyn SparseMatrix, b: &dyn SparseMatrix) -> Result<()> {
        dispatch!(self, AnyMatrix, m => m.add(a, b))
    }

    fn and(&mut self, a: &dyn SparseMatrix, b: &dyn SparseMatrix) -> Result<()> {
        dispatch!(self, AnyMatrix, m => m.and(a, b))
    }

    fn or(&mut self, a: &dyn SparseMatrix, b: &dyn SparseMatrix) -> Result<()> {
        dispatch!(self, AnyMatrix, m => m.or(a, b))
    }

    fn xor(&mut self, a: &dyn SparseMatrix, b: &dyn SparseMatrix) -> Result<()> {
        dispatch!(self, AnyMatrix, m => m.xor(a, b))
    }

    fn negate(&mut self) {
        dispatch!(self, AnyMatrix, m => m.negate())
    }
}

impl MatrixOperations for AnyMatrix {
    type Vector = AnyVector;

    fn row(&self, row: usize) -> Result<AnyVector> {
        Ok(match self {
            AnyMatrix::Compact(m) => AnyVector::Compact(m.row(row)?),
            AnyMatrix::Map(m) => AnyVector::Map(m.row(row)?),
            AnyMatrix::Windowed(m) => AnyVector::Windowed(m.row(row)?),
        })
    }

    fn column(&self, col: usize) -> Result<AnyVector> {
        Ok(match self {
            AnyMatrix::Compact(m) => AnyVector::Compact(m.column(col)?),
            AnyMatrix::Map(m) => AnyVector::Map(m.column(col)?),
            AnyMatrix::Windowed(m) => AnyVector::Windowed(m.column(col)?),
        })
    }

    fn slice(&self, row: usize, col: usize, rows: usize, cols: usize) -> Result<Self> {
        Ok(match self {
            AnyMatrix::Compact(m) => AnyMatrix::Compact(m.slice(row, col, rows, cols)?),
            AnyMatrix::Map(m) => AnyMatrix::Map(m.slice(row, col, rows, cols)?),
            AnyMatrix::Windowed(m) => AnyMatrix::Windowed(m.slice(row, col, rows, cols)?),
        })
    }

    fn t(&self) -> Self {
        match self {
            AnyMatrix::Compact(m) => AnyMatrix::Compact(m.t()),
            AnyMatrix::Map(m) => AnyMatrix::Map(m.t()),
            AnyMatrix::Windowed(m) => AnyMatrix::Windowed(m.t()),
        }
    }
}

impl PartialEq for AnyMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for AnyMatrix {}

impl std::fmt::Display for AnyMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        dispatch!(self, AnyMatrix, m => std::fmt::Display::fmt(m, f))
    }
}

/// A vector of any engine
///
/// Equality compares the logical bits. Cloning a `Windowed` value yields a
/// handle on the same store; use [`EngineConfig::copy_vector`](crate::EngineConfig::copy_vector)
/// for an independent copy.
#[derive(Debug, Clone)]
pub enum AnyVector {
    Compact(CompactVector),
    Map(MapVector),
    Windowed(WindowedVector),
}

impl AnyVector {
    /// The engine holding the bits
    pub fn engine(&self) -> Engine {
        match self {
            AnyVector::Compact(_) => Engine::Compact,
            AnyVector::Map(_) => Engine::Map,
            AnyVector::Windowed(_) => Engine::Windowed,
        }
    }

    /// Copy out the wire representation
    pub fn to_wire(&self) -> VectorWire {
        dispatch!(self, AnyVector, v => v.to_wire())
    }

    /// Rebuild a wire payload into the given engine
    pub fn from_wire(wire: VectorWire, engine: Engine) -> Result<Self> {
        let compact = CompactVector::from_wire(wire)?;
        Ok(match engine {
            Engine::Compact => AnyVector::Compact(compact),
            Engine::Map => AnyVector::Map(MapVector::copy_from(&compact)),
            Engine::Windowed => AnyVector::Windowed(WindowedVector::copy_from(&compact)),
        })
    }

    /// Borrow the wrapped value as a trait object
    pub fn as_dyn(&self) -> &dyn SparseVector {
        dispatch!(self, AnyVector, v => v)
    }
}

impl From<CompactVector> for AnyVector {
    fn from(v: CompactVector) -> Self {
        AnyVector::Compact(v)
    }
}

impl From<MapVector> for AnyVector {
    fn from(v: MapVector) -> Self {
        AnyVector::Map(v)
    }
}

impl From<WindowedVector> for AnyVector {
    fn from(v: WindowedVector) -> Self {
        AnyVector::Windowed(v)
    }
}

impl SparseVector for AnyVector {
    fn len(&self) -> usize {
        dispatch!(self, AnyVector, v => v.len())
    }

    fn bit(&self, index: usize) -> bool {
        dispatch!(self, AnyVector, v => v.bit(index))
    }

    fn put_bit(&mut self, index: usize, value: bool) {
        dispatch!(self, AnyVector, v => v.put_bit(index, value))
    }

    fn nonzero_indices(&self) -> Vec<usize> {
        dispatch!(self, AnyVector, v => v.nonzero_indices())
    }

    fn storage_region(&self) -> Option<StorageRegion> {
        dispatch!(self, AnyVector, v => v.storage_region())
    }

    fn at(&self, index: usize) -> Result<u8> {
        dispatch!(self, AnyVector, v => v.at(index))
    }

    fn set(&mut self, index: usize, value: u8) -> Result<()> {
        dispatch!(self, AnyVector, v => v.set(index, value))
    }

    fn hamming_weight(&self) -> usize {
        dispatch!(self, AnyVector, v => v.hamming_weight())
    }

    fn is_zero(&self) -> bool {
        dispatch!(self, AnyVector, v => v.is_zero())
    }

    fn hamming_distance(&self, other: &dyn SparseVector) -> Result<usize> {
        dispatch!(self, AnyVector, v => v.hamming_distance(other))
    }

    fn dot(&self, other: &dyn SparseVector) -> Result<u8> {
        dispatch!(self, AnyVector, v => v.dot(other))
    }

    fn next_set(&self, from: usize) -> Result<Option<usize>> {
        dispatch!(self, AnyVector, v => v.next_set(from))
    }

    fn equals(&self, other: &dyn SparseVector) -> bool {
        dispatch!(self, AnyVector, v => v.equals(other))
    }

    fn zeroize(&mut self) {
        dispatch!(self, AnyVector, v => v.zeroize())
    }

    fn negate(&mut self) {
        dispatch!(self, AnyVector, v => v.negate())
    }

    fn set_vec(&mut self, a: &dyn SparseVector, offset: usize) -> Result<()> {
        dispatch!(self, AnyVector, v => v.set_vec(a, offset))
    }

    fn add(&mut self, a: &dyn SparseVector, b: &dyn SparseVector) -> Result<()> {
        dispatch!(self, AnyVector, v => v.add(a, b))
    }

    fn and(&mut self, a: &dyn SparseVector, b: &dyn SparseVector) -> Result<()> {
        dispatch!(self, AnyVector, v => v.and(a, b))
    }

    fn or(&mut self, a: &dyn SparseVector, b: &dyn SparseVector) -> Result<()> {
        dispatch!(self, AnyVector, v => v.or(a, b))
    }

    fn xor(&mut self, a: &dyn SparseVector, b: &dyn SparseVector) -> Result<()> {
        dispatch!(self, AnyVector, v => v.xor(a, b))
    }

    fn mat_mul(&mut self, mat: &dyn SparseMatrix, vec: &dyn SparseVector) -> Result<()> {
        dispatch!(self, AnyVector, v => v.mat_mul(mat, vec))
    }

    fn mul_mat(&mut self, vec: &dyn SparseVector, mat: &dyn SparseMatrix) -> Result<()> {
        dispatch!(self, AnyVector, v => v.mul_mat(vec, mat))
    }
}

impl VectorOperations for AnyVector {
    fn slice(&self, start: usize, len: usize) -> Result<Self> {
        Ok(match self {
            AnyVector::Compact(v) => AnyVector::Compact(v.slice(start, len)?),
            AnyVector::Map(v) => AnyVector::Map(v.slice(start, len)?),
            AnyVector::Windowed(v) => AnyVector::Windowed(v.slice(start, len)?),
        })
    }
}

impl PartialEq for AnyVector {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for AnyVector {}

impl std::fmt::Display for AnyVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        dispatch!(self, AnyVector, v => std::fmt::Display::fmt(v, f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_tag() {
        assert_eq!(AnyMatrix::from(CompactMatrix::new(1, 1)).engine(), Engine::Compact);
        assert_eq!(AnyMatrix::from(MapMatrix::new(1, 1)).engine(), Engine::Map);
        assert_eq!(AnyVector::from(WindowedVector::new(2)).engine(), Engine::Windowed);
    }

    #[test]
    fn test_forwarding_keeps_views() {
        let m = AnyMatrix::from(WindowedMatrix::identity(3));
        let mut row = m.row(2).unwrap();
        row.set(0, 1).unwrap();
        assert_eq!(m.at(2, 0), Ok(1));
        assert!(m.storage_region().is_some());
    }

    #[test]
    fn test_equality_ignores_engine() {
        let compact = AnyMatrix::from(CompactMatrix::identity(3));
        let map = AnyMatrix::from(MapMatrix::identity(3));
        let windowed = AnyMatrix::from(WindowedMatrix::identity(3));
        assert_eq!(compact, map);
        assert_eq!(map, windowed);
        assert_ne!(compact, AnyMatrix::from(MapMatrix::new(3, 3)));
        assert_ne!(compact, AnyMatrix::from(MapMatrix::identity(4)));

        let values = [1, 0, 1, 1];
        let a = AnyVector::from(CompactVector::from_values(4, &values).unwrap());
        let b = AnyVector::from(MapVector::from_values(4, &values).unwrap());
        let c = AnyVector::from(WindowedVector::from_values(4, &values).unwrap());
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_ne!(a, AnyVector::from(MapVector::new(4)));
    }

    #[test]
    fn test_from_wire_each_engine() {
        let wire = CompactMatrix::identity(2).to_wire();
        for engine in Engine::ALL {
            let m = AnyMatrix::from_wire(wire.clone(), engine).unwrap();
            assert_eq!(m.engine(), engine);
            assert!(m.equals(&CompactMatrix::identity(2)));
        }
    }
}
