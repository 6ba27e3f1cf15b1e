//! Coordinate-form invariant checks
//!
//! Used when rehydrating a matrix or vector from an external payload, where
//! the sort and uniqueness invariants cannot be assumed.

use crate::BsmatError;

/// Validate parallel row/column arrays against the coordinate invariant
///
/// Both arrays must have equal length, rows must be non-decreasing, columns
/// strictly increasing within a row run, and every index inside the
/// dimensions.
pub fn validate_coordinates(
    rows: usize,
    cols: usize,
    row_indices: &[usize],
    col_indices: &[usize],
) -> Result<(), BsmatError> {
    if row_indices.len() != col_indices.len() {
        return Err(BsmatError::CorruptedData(
            "row and column index arrays differ in length",
        ));
    }

    let mut previous: Option<(usize, usize)> = None;
    for (&r, &c) in row_indices.iter().zip(col_indices) {
        if r >= rows || c >= cols {
            return Err(BsmatError::CorruptedData("index exceeds matrix dimensions"));
        }
        if let Some(prev) = previous {
            if (r, c) <= prev {
                return Err(BsmatError::CorruptedData(
                    "coordinates are not sorted and unique",
                ));
            }
        }
        previous = Some((r, c));
    }
    Ok(())
}

/// Validate a sorted index list against a vector length
pub fn validate_indices(length: usize, indices: &[usize]) -> Result<(), BsmatError> {
    let mut previous: Option<usize> = None;
    for &i in indices {
        if i >= length {
            return Err(BsmatError::CorruptedData("index exceeds vector length"));
        }
        if previous.is_some_and(|p| i <= p) {
            return Err(BsmatError::CorruptedData("indices are not sorted and unique"));
        }
        previous = Some(i);
    }
    Ok(())
}
