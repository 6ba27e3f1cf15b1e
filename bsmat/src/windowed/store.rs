use std::cell::RefCell;
use std::rc::Rc;

use bsmat_core::StorageRegion;

use crate::map::DualMap;

pub(crate) type Store = Rc<RefCell<DualMap>>;

pub(crate) fn fresh_store(map: DualMap) -> Store {
    log::debug!("allocating windowed store with {} set bits", map.nnz());
    Rc::new(RefCell::new(map))
}

/// Placement of a window inside its store
///
/// `row_start` and `col_start` are store coordinates regardless of
/// orientation. `rows` and `cols` are the dimensions the window presents;
/// when `transposed` is set they cover `cols x rows` store cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Window {
    pub transposed: bool,
    pub row_start: usize,
    pub col_start: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Window {
    pub fn full(rows: usize, cols: usize) -> Self {
        Self {
            transposed: false,
            row_start: 0,
            col_start: 0,
            rows,
            cols,
        }
    }

    /// Store position of local `(row, col)`
    pub fn to_store(&self, row: usize, col: usize) -> (usize, usize) {
        if self.transposed {
            (self.row_start + col, self.col_start + row)
        } else {
            (self.row_start + row, self.col_start + col)
        }
    }

    /// Store rows and columns covered, as (row count, col count)
    fn store_extent(&self) -> (usize, usize) {
        if self.transposed {
            (self.cols, self.rows)
        } else {
            (self.rows, self.cols)
        }
    }

    /// The `rows x cols` sub-window at local `(row, col)`; not validated
    pub fn sub(&self, row: usize, col: usize, rows: usize, cols: usize) -> Self {
        let (row_start, col_start) = self.to_store(row, col);
        Self {
            transposed: self.transposed,
            row_start,
            col_start,
            rows,
            cols,
        }
    }

    pub fn flipped(&self) -> Self {
        Self {
            transposed: !self.transposed,
            row_start: self.row_start,
            col_start: self.col_start,
            rows: self.cols,
            cols: self.rows,
        }
    }

    pub fn region(&self, store: &Store) -> StorageRegion {
        let (rows, cols) = self.store_extent();
        StorageRegion {
            store: Rc::as_ptr(store) as usize,
            rows: self.row_start..self.row_start + rows,
            cols: self.col_start..self.col_start + cols,
        }
    }

    /// Local column indices set in local `row`, sorted
    pub fn row_support(&self, map: &DualMap, row: usize) -> Vec<usize> {
        if self.transposed {
            clip(map.column(self.col_start + row), self.row_start, self.cols)
        } else {
            clip(map.row(self.row_start + row), self.col_start, self.cols)
        }
    }

    /// Local row indices set in local `col`, sorted
    pub fn column_support(&self, map: &DualMap, col: usize) -> Vec<usize> {
        if self.transposed {
            clip(map.row(self.row_start + col), self.col_start, self.rows)
        } else {
            clip(map.column(self.col_start + col), self.row_start, self.rows)
        }
    }
}

/// Keep the sorted store indices inside `[start, start + len)`, made local
fn clip(indices: Vec<usize>, start: usize, len: usize) -> Vec<usize> {
    indices
        .into_iter()
        .filter(|&i| i >= start && i < start + len)
        .map(|i| i - start)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_store() {
        let w = Window::full(8, 8).sub(3, 0, 4, 4);
        assert_eq!(w.to_store(0, 3), (3, 3));
        let t = w.flipped();
        assert_eq!((t.rows, t.cols), (4, 4));
        assert_eq!(t.to_store(3, 0), (3, 3));
        let inner = t.sub(1, 2, 2, 1);
        assert_eq!(inner.to_store(0, 0), (5, 1));
    }

    #[test]
    fn test_region_is_orientation_free() {
        let store = fresh_store(DualMap::new());
        let w = Window::full(6, 4).sub(1, 2, 3, 2);
        assert_eq!(w.region(&store), w.flipped().region(&store));
        assert_eq!(w.region(&store).rows, 1..4);
        assert_eq!(w.region(&store).cols, 2..4);
    }

    #[test]
    fn test_supports() {
        let mut map = DualMap::new();
        map.insert(3, 3);
        map.insert(3, 5);
        map.insert(6, 0);
        let w = Window::full(8, 8).sub(3, 0, 4, 4);
        assert_eq!(w.row_support(&map, 0), vec![3]);
        assert_eq!(w.column_support(&map, 0), vec![3]);
        let t = w.flipped();
        assert_eq!(t.row_support(&map, 3), vec![0]);
        assert_eq!(t.column_support(&map, 0), vec![3]);
    }
}
