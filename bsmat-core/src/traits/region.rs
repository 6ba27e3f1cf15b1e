//! Storage identity for alias detection

use core::ops::Range;

/// The rectangle of a shared store that a value reads and writes
///
/// Values that own their storage outright report no region. Views over a
/// shared store report the store identity plus the rectangle they cover,
/// expressed in the store's own (untransposed) coordinates so that a window
/// and its transpose compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageRegion {
    /// Identity of the backing store, stable for its lifetime
    pub store: usize,
    /// Store rows covered by the value
    pub rows: Range<usize>,
    /// Store columns covered by the value
    pub cols: Range<usize>,
}

impl StorageRegion {
    /// Whether two regions touch at least one common store cell
    pub fn overlaps(&self, other: &StorageRegion) -> bool {
        self.store == other.store
            && self.rows.start < other.rows.end
            && other.rows.start < self.rows.end
            && self.cols.start < other.cols.end
            && other.cols.start < self.cols.end
    }
}

/// Whether two optional regions overlap
pub fn regions_overlap(a: Option<StorageRegion>, b: Option<StorageRegion>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.overlaps(&b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlaps() {
        let a = StorageRegion {
            store: 1,
            rows: 0..4,
            cols: 0..4,
        };
        let b = StorageRegion {
            store: 1,
            rows: 3..5,
            cols: 3..5,
        };
        let c = StorageRegion {
            store: 1,
            rows: 4..6,
            cols: 0..4,
        };
        let d = StorageRegion {
            store: 2,
            rows: 0..4,
            cols: 0..4,
        };
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&d));
        assert!(!regions_overlap(Some(a), None));
    }
}
