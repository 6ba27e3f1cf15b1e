//! Default matrix algorithms

use alloc::vec::Vec;

use super::check_disjoint;
use crate::index::{intersection_count, xor_merge};
use crate::traits::{SparseMatrix, SparseVector};
use crate::validation::{check_index, check_placement, check_range, check_same_shape};
use crate::{BsmatError, Result};

pub fn equals<M: SparseMatrix + ?Sized>(m: &M, other: &dyn SparseMatrix) -> bool {
    if m.dims() != other.dims() {
        return false;
    }
    (0..m.dims().0).all(|r| m.row_support(r) == other.row_support(r))
}

pub fn zeroize<M: SparseMatrix + ?Sized>(m: &mut M) {
    for (r, c) in m.nonzero_entries() {
        m.put_bit(r, c, false);
    }
}

pub fn zeroize_range<M: SparseMatrix + ?Sized>(
    m: &mut M,
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> Result<()> {
    let (total_rows, total_cols) = m.dims();
    check_range(row, rows, total_rows)?;
    check_range(col, cols, total_cols)?;
    for r in row..row + rows {
        for c in m.row_support(r) {
            if c >= col && c < col + cols {
                m.put_bit(r, c, false);
            }
        }
    }
    Ok(())
}

/// Replace the set bits of `row` with `support`
pub fn write_row<M: SparseMatrix + ?Sized>(m: &mut M, row: usize, support: &[usize]) {
    for c in m.row_support(row) {
        m.put_bit(row, c, false);
    }
    for &c in support {
        m.put_bit(row, c, true);
    }
}

/// Replace the set bits of `col` with `support`
pub fn write_column<M: SparseMatrix + ?Sized>(m: &mut M, col: usize, support: &[usize]) {
    for r in m.column_support(col) {
        m.put_bit(r, col, false);
    }
    for &r in support {
        m.put_bit(r, col, true);
    }
}

pub fn set_row<M: SparseMatrix + ?Sized>(m: &mut M, row: usize, vec: &dyn SparseVector) -> Result<()> {
    let (rows, cols) = m.dims();
    check_index(row, rows)?;
    check_same_shape((1, cols), (1, vec.len()))?;
    let support = vec.nonzero_indices();
    write_row(m, row, &support);
    Ok(())
}

pub fn set_column<M: SparseMatrix + ?Sized>(
    m: &mut M,
    col: usize,
    vec: &dyn SparseVector,
) -> Result<()> {
    let (rows, cols) = m.dims();
    check_index(col, cols)?;
    check_same_shape((rows, 1), (vec.len(), 1))?;
    let support = vec.nonzero_indices();
    write_column(m, col, &support);
    Ok(())
}

pub fn set_matrix<M: SparseMatrix + ?Sized>(
    m: &mut M,
    a: &dyn SparseMatrix,
    row_offset: usize,
    col_offset: usize,
) -> Result<()> {
    let inner = a.dims();
    check_placement((row_offset, col_offset), inner, m.dims())?;
    let entries = a.nonzero_entries();
    zeroize_range(m, row_offset, col_offset, inner.0, inner.1)?;
    for (r, c) in entries {
        m.put_bit(row_offset + r, col_offset + c, true);
    }
    Ok(())
}

pub fn swap_rows<M: SparseMatrix + ?Sized>(m: &mut M, i1: usize, i2: usize) -> Result<()> {
    let rows = m.dims().0;
    check_index(i1, rows)?;
    check_index(i2, rows)?;
    if i1 == i2 {
        return Ok(());
    }
    let first = m.row_support(i1);
    let second = m.row_support(i2);
    write_row(m, i1, &second);
    write_row(m, i2, &first);
    Ok(())
}

pub fn swap_columns<M: SparseMatrix + ?Sized>(m: &mut M, j1: usize, j2: usize) -> Result<()> {
    let cols = m.dims().1;
    check_index(j1, cols)?;
    check_index(j2, cols)?;
    if j1 == j2 {
        return Ok(());
    }
    let first = m.column_support(j1);
    let second = m.column_support(j2);
    write_column(m, j1, &second);
    write_column(m, j2, &first);
    Ok(())
}

pub fn add_rows<M: SparseMatrix + ?Sized>(m: &mut M, i1: usize, i2: usize, dest: usize) -> Result<()> {
    let rows = m.dims().0;
    check_index(i1, rows)?;
    check_index(i2, rows)?;
    check_index(dest, rows)?;
    let sum = xor_merge(&m.row_support(i1), &m.row_support(i2));
    write_row(m, dest, &sum);
    Ok(())
}

pub fn add_columns<M: SparseMatrix + ?Sized>(
    m: &mut M,
    j1: usize,
    j2: usize,
    dest: usize,
) -> Result<()> {
    let cols = m.dims().1;
    check_index(j1, cols)?;
    check_index(j2, cols)?;
    check_index(dest, cols)?;
    let sum = xor_merge(&m.column_support(j1), &m.column_support(j2));
    write_column(m, dest, &sum);
    Ok(())
}

/// Validate the operands of `dest = a * b`
pub fn check_mul(
    dest: (usize, usize),
    a: (usize, usize),
    b: (usize, usize),
) -> Result<()> {
    if a.1 != b.0 {
        return Err(BsmatError::ShapeMismatch {
            expected: (a.1, b.1),
            found: b,
        });
    }
    check_same_shape((a.0, b.1), dest)
}

pub fn mul<M: SparseMatrix + ?Sized>(
    m: &mut M,
    a: &dyn SparseMatrix,
    b: &dyn SparseMatrix,
) -> Result<()> {
    check_mul(m.dims(), a.dims(), b.dims())?;
    check_disjoint(m.storage_region(), &[a.storage_region(), b.storage_region()])?;
    let (rows, cols) = m.dims();
    let columns: Vec<Vec<usize>> = (0..cols).map(|j| b.column_support(j)).collect();
    for i in 0..rows {
        let row = a.row_support(i);
        for (j, column) in columns.iter().enumerate() {
            m.put_bit(i, j, intersection_count(&row, column) % 2 == 1);
        }
    }
    Ok(())
}

pub fn elementwise<M: SparseMatrix + ?Sized>(
    m: &mut M,
    a: &dyn SparseMatrix,
    b: &dyn SparseMatrix,
    op: fn(bool, bool) -> bool,
) -> Result<()> {
    check_same_shape(m.dims(), a.dims())?;
    check_same_shape(m.dims(), b.dims())?;
    check_disjoint(m.storage_region(), &[a.storage_region(), b.storage_region()])?;
    let (rows, cols) = m.dims();
    for r in 0..rows {
        for c in 0..cols {
            m.put_bit(r, c, op(a.bit(r, c), b.bit(r, c)));
        }
    }
    Ok(())
}

pub fn negate<M: SparseMatrix + ?Sized>(m: &mut M) {
    let (rows, cols) = m.dims();
    for r in 0..rows {
        for c in 0..cols {
            let v = m.bit(r, c);
            m.put_bit(r, c, !v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::dense::{DenseMatrix, DenseVector};
    use alloc::vec;

    #[test]
    fn test_set_and_at() {
        let mut m = DenseMatrix::from_values(2, 2, &[]);
        m.set(0, 1, 3).unwrap();
        assert_eq!(m.at(0, 1), Ok(1));
        m.set(0, 1, 4).unwrap();
        assert_eq!(m.at(0, 1), Ok(0));
        assert_eq!(
            m.at(2, 0),
            Err(BsmatError::IndexOutOfRange { index: 2, extent: 2 })
        );
    }

    #[test]
    fn test_add_rows_reads_before_write() {
        let mut m = DenseMatrix::from_values(3, 3, &[1, 1, 0, 0, 1, 1, 0, 0, 0]);
        m.add_rows(0, 1, 0).unwrap();
        assert_eq!(m.row_support(0), vec![0, 2]);
        m.add_rows(1, 1, 1).unwrap();
        assert!(m.row_support(1).is_empty());
    }

    #[test]
    fn test_add_columns() {
        let mut m = DenseMatrix::from_values(2, 3, &[1, 1, 0, 0, 1, 0]);
        m.add_columns(0, 1, 2).unwrap();
        assert_eq!(m.column_support(2), vec![1]);
    }

    #[test]
    fn test_swap_rows_and_columns() {
        let mut m = DenseMatrix::from_values(2, 2, &[1, 0, 0, 1]);
        m.swap_rows(0, 1).unwrap();
        assert_eq!(m.nonzero_entries(), vec![(0, 1), (1, 0)]);
        m.swap_columns(0, 1).unwrap();
        assert_eq!(m.nonzero_entries(), vec![(0, 0), (1, 1)]);
        assert!(m.swap_rows(0, 2).is_err());
    }

    #[test]
    fn test_mul() {
        let a = DenseMatrix::from_values(1, 4, &[1, 0, 1, 0]);
        let b = DenseMatrix::from_values(4, 1, &[1, 0, 1, 0]);
        let mut c = DenseMatrix::from_values(1, 1, &[1]);
        c.mul(&a, &b).unwrap();
        assert!(c.is_zero());

        let mut wrong = DenseMatrix::from_values(2, 1, &[]);
        assert_eq!(
            wrong.mul(&a, &b),
            Err(BsmatError::ShapeMismatch {
                expected: (1, 1),
                found: (2, 1)
            })
        );
        assert!(matches!(
            c.mul(&a, &a),
            Err(BsmatError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_elementwise() {
        let a = DenseMatrix::from_values(2, 2, &[1, 1, 0, 0]);
        let b = DenseMatrix::from_values(2, 2, &[1, 0, 1, 0]);
        let mut c = DenseMatrix::from_values(2, 2, &[]);
        c.and(&a, &b).unwrap();
        assert_eq!(c.nonzero_entries(), vec![(0, 0)]);
        c.or(&a, &b).unwrap();
        assert_eq!(c.nnz(), 3);
        c.add(&a, &b).unwrap();
        assert_eq!(c.nonzero_entries(), vec![(0, 1), (1, 0)]);
        c.negate();
        assert_eq!(c.nonzero_entries(), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_set_matrix_and_zeroize_range() {
        let mut m = DenseMatrix::from_values(3, 3, &[1; 9]);
        let block = DenseMatrix::from_values(2, 2, &[0, 1, 0, 0]);
        m.set_matrix(&block, 1, 1).unwrap();
        assert_eq!(m.row_support(1), vec![0, 2]);
        assert_eq!(m.row_support(2), vec![0]);
        assert!(m.set_matrix(&block, 2, 0).is_err());

        m.zeroize_range(0, 0, 1, 3).unwrap();
        assert!(m.row_support(0).is_empty());
        m.zeroize_range(0, 0, 0, 0).unwrap();
        assert!(m.zeroize_range(2, 0, 2, 1).is_err());
    }

    #[test]
    fn test_set_row_and_column() {
        let mut m = DenseMatrix::from_values(2, 3, &[]);
        m.set_row(1, &DenseVector::from_values(&[1, 0, 1])).unwrap();
        assert_eq!(m.row_support(1), vec![0, 2]);
        m.set_column(0, &DenseVector::from_values(&[1, 0])).unwrap();
        assert_eq!(m.column_support(0), vec![0]);
        assert_eq!(
            m.set_row(0, &DenseVector::from_values(&[1, 0])),
            Err(BsmatError::ShapeMismatch {
                expected: (1, 3),
                found: (1, 2)
            })
        );
    }
}
