use bsmat_core::{
    MatrixOperations, Result, SparseMatrix, SparseVector, StorageRegion, VectorOperations,
    VectorWire,
};

use super::WindowedMatrix;
use crate::compact::CompactVector;

/// GF(2) vector presented by a `1 x len` window
///
/// Vectors taken from a matrix with `row`, `column` or `slice` write
/// straight through to the matrix store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowedVector {
    view: WindowedMatrix,
}

impl WindowedVector {
    pub(crate) fn over(view: WindowedMatrix) -> Self {
        Self { view }
    }

    /// Create an all-zero vector over a fresh store
    pub fn new(len: usize) -> Self {
        Self::over(WindowedMatrix::new(1, len))
    }

    /// Create a vector from dense values; odd values are set bits
    pub fn from_values(len: usize, values: &[u8]) -> Result<Self> {
        Ok(Self::over(WindowedMatrix::from_values(1, len, values)?))
    }

    /// Copy any vector into a fresh store
    pub fn copy_from(v: &dyn SparseVector) -> Self {
        Self::over(WindowedMatrix::from_vector(v))
    }

    /// Independent copy of this vector's bits
    pub fn deep_copy(&self) -> Self {
        Self::copy_from(self)
    }

    /// The `1 x len` matrix window this vector reads through
    pub fn as_matrix(&self) -> &WindowedMatrix {
        &self.view
    }

    /// Convert to the wire representation
    pub fn to_wire(&self) -> VectorWire {
        CompactVector::copy_from(self).into_wire()
    }

    /// Rebuild from a wire payload into a fresh store
    pub fn from_wire(wire: VectorWire) -> Result<Self> {
        Ok(Self::copy_from(&CompactVector::from_wire(wire)?))
    }
}

impl SparseVector for WindowedVector {
    fn len(&self) -> usize {
        self.view.dims().1
    }

    fn bit(&self, index: usize) -> bool {
        self.view.bit(0, index)
    }

    fn put_bit(&mut self, index: usize, value: bool) {
        self.view.put_bit(0, index, value);
    }

    fn nonzero_indices(&self) -> Vec<usize> {
        self.view.row_support(0)
    }

    fn storage_region(&self) -> Option<StorageRegion> {
        self.view.storage_region()
    }
}

impl VectorOperations for WindowedVector {
    /// The bits `[start, start + len)` as a view over the same store
    fn slice(&self, start: usize, len: usize) -> Result<Self> {
        Ok(Self::over(self.view.slice(0, start, 1, len)?))
    }
}

impl std::fmt::Display for WindowedVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::render_vector(self, f)
    }
}
