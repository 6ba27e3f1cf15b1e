use bsmat_core::validation::{check_index, check_seed_len, check_window};
use bsmat_core::{
    BsmatError, MatrixOperations, MatrixWire, Result, SparseMatrix, SparseVector, StorageRegion,
};

use super::store::{fresh_store, Store, Window};
use super::WindowedVector;
use crate::compact::CompactMatrix;
use crate::map::DualMap;

/// GF(2) matrix window over a shared store
///
/// Cloning a handle yields another view of the same cells. Use
/// [`WindowedMatrix::deep_copy`] for an independent value.
#[derive(Debug, Clone)]
pub struct WindowedMatrix {
    store: Store,
    window: Window,
}

impl WindowedMatrix {
    fn with_map(rows: usize, cols: usize, map: DualMap) -> Self {
        Self {
            store: fresh_store(map),
            window: Window::full(rows, cols),
        }
    }

    pub(crate) fn view(&self, window: Window) -> Self {
        Self {
            store: self.store.clone(),
            window,
        }
    }

    /// Create an all-zero matrix over a fresh store
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_map(rows, cols, DualMap::new())
    }

    /// Create an all-zero matrix whose store is sized for about `entries`
    /// set bits
    pub fn with_capacity(rows: usize, cols: usize, entries: usize) -> Self {
        Self::with_map(
            rows,
            cols,
            DualMap::with_capacity(entries.min(rows), entries.min(cols)),
        )
    }

    /// Create a matrix from row-major dense values; odd values are set bits
    pub fn from_values(rows: usize, cols: usize, values: &[u8]) -> Result<Self> {
        let cells = rows
            .checked_mul(cols)
            .ok_or(BsmatError::InvalidArgument("matrix cell count overflows"))?;
        check_seed_len(values.len(), cells)?;
        let mut map = DualMap::new();
        for (i, v) in values.iter().enumerate() {
            if v % 2 == 1 {
                map.insert(i / cols, i % cols);
            }
        }
        Ok(Self::with_map(rows, cols, map))
    }

    /// Create the `size x size` identity
    pub fn identity(size: usize) -> Self {
        let mut map = DualMap::new();
        for i in 0..size {
            map.insert(i, i);
        }
        Self::with_map(size, size, map)
    }

    /// Copy any matrix into a fresh store; never aliases `m`
    pub fn copy_from(m: &dyn SparseMatrix) -> Self {
        let (rows, cols) = m.dims();
        let mut map = DualMap::new();
        for (r, c) in m.nonzero_entries() {
            map.insert(r, c);
        }
        Self::with_map(rows, cols, map)
    }

    /// Create a `1 x len` matrix over a fresh store holding the bits of `v`
    pub fn from_vector(v: &dyn SparseVector) -> Self {
        let mut map = DualMap::new();
        for c in v.nonzero_indices() {
            map.insert(0, c);
        }
        Self::with_map(1, v.len(), map)
    }

    /// Independent copy of this window's cells
    pub fn deep_copy(&self) -> Self {
        Self::copy_from(self)
    }

    /// Whether both handles read and write the same store
    pub fn shares_store(&self, other: &WindowedMatrix) -> bool {
        std::rc::Rc::ptr_eq(&self.store, &other.store)
    }

    /// Convert to the wire representation
    pub fn to_wire(&self) -> MatrixWire {
        CompactMatrix::copy_from(self).into_wire()
    }

    /// Rebuild from a wire payload into a fresh store
    pub fn from_wire(wire: MatrixWire) -> Result<Self> {
        Ok(Self::copy_from(&CompactMatrix::from_wire(wire)?))
    }
}

impl SparseMatrix for WindowedMatrix {
    fn dims(&self) -> (usize, usize) {
        (self.window.rows, self.window.cols)
    }

    fn bit(&self, row: usize, col: usize) -> bool {
        let (r, c) = self.window.to_store(row, col);
        self.store.borrow().contains(r, c)
    }

    fn put_bit(&mut self, row: usize, col: usize, value: bool) {
        let (r, c) = self.window.to_store(row, col);
        self.store.borrow_mut().put(r, c, value);
    }

    fn row_support(&self, row: usize) -> Vec<usize> {
        self.window.row_support(&self.store.borrow(), row)
    }

    fn column_support(&self, col: usize) -> Vec<usize> {
        self.window.column_support(&self.store.borrow(), col)
    }

    fn storage_region(&self) -> Option<StorageRegion> {
        Some(self.window.region(&self.store))
    }
}

impl MatrixOperations for WindowedMatrix {
    type Vector = WindowedVector;

    /// Row `row` as a view; writes through it reach this matrix
    fn row(&self, row: usize) -> Result<WindowedVector> {
        check_index(row, self.window.rows)?;
        let window = self.window.sub(row, 0, 1, self.window.cols);
        Ok(WindowedVector::over(self.view(window)))
    }

    /// Column `col` as a view; writes through it reach this matrix
    fn column(&self, col: usize) -> Result<WindowedVector> {
        check_index(col, self.window.cols)?;
        let window = self.window.sub(0, col, self.window.rows, 1).flipped();
        Ok(WindowedVector::over(self.view(window)))
    }

    /// The block at `(row, col)` as a view over the same store
    fn slice(&self, row: usize, col: usize, rows: usize, cols: usize) -> Result<Self> {
        check_window(row, rows, self.window.rows)?;
        check_window(col, cols, self.window.cols)?;
        Ok(self.view(self.window.sub(row, col, rows, cols)))
    }

    /// The transpose as a view over the same store
    fn t(&self) -> Self {
        self.view(self.window.flipped())
    }
}

impl PartialEq for WindowedMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for WindowedMatrix {}

impl std::fmt::Display for WindowedMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::render_matrix(self, f)
    }
}
