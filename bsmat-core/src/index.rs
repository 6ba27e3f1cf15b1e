//! Sorted index array utilities for the coordinate form
//!
//! The coordinate form keeps every set bit as an entry of two parallel,
//! row-sorted arrays. These helpers locate runs inside such arrays and
//! shift their contents in place. Every mutation of the coordinate form is
//! expressed through `splice_insert_one`, `splice_insert_range` and
//! `splice_cut`, which keeps the off-by-one surface in one place.

use alloc::vec::Vec;
use core::ops::Range;

/// Locate the half-open range of entries belonging to `row`
///
/// `row_indices` must be sorted ascending. The result is empty (with `start`
/// at the insertion point) when the row has no entries.
pub fn range_of_row(row_indices: &[usize], row: usize) -> Range<usize> {
    let start = row_indices.partition_point(|&r| r < row);
    let end = start + row_indices[start..].partition_point(|&r| r <= row);
    start..end
}

/// Find the insertion point of `value` in a sorted slice
///
/// Returns the position of `value` if present, otherwise the position it
/// would occupy.
pub fn locate(sorted: &[usize], value: usize) -> usize {
    sorted.partition_point(|&v| v < value)
}

/// Check membership in a sorted slice
pub fn contains_sorted(sorted: &[usize], value: usize) -> bool {
    let pos = locate(sorted, value);
    pos < sorted.len() && sorted[pos] == value
}

/// Insert one value at `pos`, shifting the tail right
pub fn splice_insert_one(array: &mut Vec<usize>, pos: usize, value: usize) {
    array.insert(pos, value);
}

/// Insert `values` at `pos`, shifting the tail right by `values.len()`
pub fn splice_insert_range(array: &mut Vec<usize>, pos: usize, values: &[usize]) {
    if values.is_empty() {
        return;
    }
    let old_len = array.len();
    array.resize(old_len + values.len(), 0);
    array.copy_within(pos..old_len, pos + values.len());
    array[pos..pos + values.len()].copy_from_slice(values);
}

/// Remove the entries in `[start, end)`, shifting the tail left
pub fn splice_cut(array: &mut Vec<usize>, start: usize, end: usize) {
    if start >= end {
        return;
    }
    let count = end - start;
    let old_len = array.len();
    array.copy_within(end..old_len, start);
    array.truncate(old_len - count);
}

/// Symmetric difference of two sorted, duplicate-free slices
///
/// A value appears in the output iff it appears in exactly one input, which
/// is row addition over GF(2).
pub fn xor_merge(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut ai, mut bi) = (0, 0);
    while ai < a.len() && bi < b.len() {
        match a[ai].cmp(&b[bi]) {
            core::cmp::Ordering::Less => {
                out.push(a[ai]);
                ai += 1;
            }
            core::cmp::Ordering::Greater => {
                out.push(b[bi]);
                bi += 1;
            }
            core::cmp::Ordering::Equal => {
                ai += 1;
                bi += 1;
            }
        }
    }
    out.extend_from_slice(&a[ai..]);
    out.extend_from_slice(&b[bi..]);
    out
}

/// Number of values shared by two sorted, duplicate-free slices
pub fn intersection_count(a: &[usize], b: &[usize]) -> usize {
    let (mut ai, mut bi, mut count) = (0, 0, 0);
    while ai < a.len() && bi < b.len() {
        match a[ai].cmp(&b[bi]) {
            core::cmp::Ordering::Less => ai += 1,
            core::cmp::Ordering::Greater => bi += 1,
            core::cmp::Ordering::Equal => {
                count += 1;
                ai += 1;
                bi += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_range_of_row() {
        let rows = [0, 0, 2, 2, 2, 5];
        assert_eq!(range_of_row(&rows, 0), 0..2);
        assert_eq!(range_of_row(&rows, 1), 2..2);
        assert_eq!(range_of_row(&rows, 2), 2..5);
        assert_eq!(range_of_row(&rows, 4), 5..5);
        assert_eq!(range_of_row(&rows, 5), 5..6);
        assert_eq!(range_of_row(&rows, 9), 6..6);
        assert_eq!(range_of_row(&[], 3), 0..0);
    }

    #[test]
    fn test_locate() {
        let cols = [1, 3, 4, 8];
        assert_eq!(locate(&cols, 0), 0);
        assert_eq!(locate(&cols, 3), 1);
        assert_eq!(locate(&cols, 5), 3);
        assert_eq!(locate(&cols, 9), 4);
        assert!(contains_sorted(&cols, 8));
        assert!(!contains_sorted(&cols, 2));
        assert!(!contains_sorted(&[], 2));
    }

    #[test]
    fn test_splice_insert_one() {
        let mut a = vec![1, 3, 5];
        splice_insert_one(&mut a, 0, 0);
        splice_insert_one(&mut a, 2, 2);
        splice_insert_one(&mut a, 5, 6);
        assert_eq!(a, vec![0, 1, 2, 3, 5, 6]);
    }

    #[test]
    fn test_splice_insert_range() {
        let mut a = vec![1, 2, 7, 8];
        splice_insert_range(&mut a, 2, &[3, 4, 5]);
        assert_eq!(a, vec![1, 2, 3, 4, 5, 7, 8]);

        splice_insert_range(&mut a, 7, &[9]);
        assert_eq!(a, vec![1, 2, 3, 4, 5, 7, 8, 9]);

        splice_insert_range(&mut a, 0, &[]);
        assert_eq!(a.len(), 8);

        let mut empty = Vec::new();
        splice_insert_range(&mut empty, 0, &[4, 5]);
        assert_eq!(empty, vec![4, 5]);
    }

    #[test]
    fn test_splice_cut() {
        let mut a = vec![0, 1, 2, 3, 4, 5];
        splice_cut(&mut a, 1, 3);
        assert_eq!(a, vec![0, 3, 4, 5]);

        splice_cut(&mut a, 3, 4);
        assert_eq!(a, vec![0, 3, 4]);

        splice_cut(&mut a, 2, 2);
        assert_eq!(a, vec![0, 3, 4]);

        splice_cut(&mut a, 0, 3);
        assert!(a.is_empty());
    }

    #[test]
    fn test_xor_merge() {
        assert_eq!(xor_merge(&[0, 2, 4], &[1, 2, 5]), vec![0, 1, 4, 5]);
        assert_eq!(xor_merge(&[1, 2], &[1, 2]), Vec::<usize>::new());
        assert_eq!(xor_merge(&[], &[3]), vec![3]);
    }

    #[test]
    fn test_intersection_count() {
        assert_eq!(intersection_count(&[0, 2, 4, 6], &[2, 3, 6]), 2);
        assert_eq!(intersection_count(&[], &[1]), 0);
    }
}
