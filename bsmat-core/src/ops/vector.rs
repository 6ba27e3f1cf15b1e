//! Default vector algorithms

use super::check_disjoint;
use crate::index::{intersection_count, xor_merge};
use crate::traits::{SparseMatrix, SparseVector};
use crate::validation::{check_placement, check_same_shape};
use crate::Result;

fn check_len(expected: usize, found: usize) -> Result<()> {
    check_same_shape((1, expected), (1, found))
}

pub fn hamming_distance<V: SparseVector + ?Sized>(v: &V, other: &dyn SparseVector) -> Result<usize> {
    check_len(v.len(), other.len())?;
    Ok(xor_merge(&v.nonzero_indices(), &other.nonzero_indices()).len())
}

pub fn dot<V: SparseVector + ?Sized>(v: &V, other: &dyn SparseVector) -> Result<u8> {
    check_len(v.len(), other.len())?;
    Ok((intersection_count(&v.nonzero_indices(), &other.nonzero_indices()) % 2) as u8)
}

pub fn set_vec<V: SparseVector + ?Sized>(v: &mut V, a: &dyn SparseVector, offset: usize) -> Result<()> {
    check_placement((0, offset), (1, a.len()), (1, v.len()))?;
    let values = a.nonzero_indices();
    for i in v.nonzero_indices() {
        if i >= offset && i < offset + a.len() {
            v.put_bit(i, false);
        }
    }
    for i in values {
        v.put_bit(offset + i, true);
    }
    Ok(())
}

pub fn elementwise<V: SparseVector + ?Sized>(
    v: &mut V,
    a: &dyn SparseVector,
    b: &dyn SparseVector,
    op: fn(bool, bool) -> bool,
) -> Result<()> {
    check_len(v.len(), a.len())?;
    check_len(v.len(), b.len())?;
    check_disjoint(v.storage_region(), &[a.storage_region(), b.storage_region()])?;
    for i in 0..v.len() {
        v.put_bit(i, op(a.bit(i), b.bit(i)));
    }
    Ok(())
}

pub fn mat_mul<V: SparseVector + ?Sized>(
    v: &mut V,
    mat: &dyn SparseMatrix,
    vec: &dyn SparseVector,
) -> Result<()> {
    let (rows, cols) = mat.dims();
    check_len(cols, vec.len())?;
    check_len(rows, v.len())?;
    check_disjoint(v.storage_region(), &[mat.storage_region(), vec.storage_region()])?;
    let support = vec.nonzero_indices();
    for i in 0..rows {
        v.put_bit(i, intersection_count(&mat.row_support(i), &support) % 2 == 1);
    }
    Ok(())
}

pub fn mul_mat<V: SparseVector + ?Sized>(
    v: &mut V,
    vec: &dyn SparseVector,
    mat: &dyn SparseMatrix,
) -> Result<()> {
    let (rows, cols) = mat.dims();
    check_len(rows, vec.len())?;
    check_len(cols, v.len())?;
    check_disjoint(v.storage_region(), &[vec.storage_region(), mat.storage_region()])?;
    let support = vec.nonzero_indices();
    for j in 0..cols {
        v.put_bit(j, intersection_count(&support, &mat.column_support(j)) % 2 == 1);
    }
    Ok(())
}
