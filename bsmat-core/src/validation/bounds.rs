//! Index and extent validation
//!
//! Pure functions shared by every engine so that the same arguments fail
//! with the same error regardless of representation.

use crate::BsmatError;

/// Validate that `index` lies in `[0, extent)`
pub const fn check_index(index: usize, extent: usize) -> Result<(), BsmatError> {
    if index >= extent {
        return Err(BsmatError::IndexOutOfRange { index, extent });
    }
    Ok(())
}

/// Validate a `(row, col)` position against matrix dimensions
pub const fn check_position(row: usize, col: usize, dims: (usize, usize)) -> Result<(), BsmatError> {
    if let Err(e) = check_index(row, dims.0) {
        return Err(e);
    }
    check_index(col, dims.1)
}

/// Validate that two shapes are identical
pub fn check_same_shape(expected: (usize, usize), found: (usize, usize)) -> Result<(), BsmatError> {
    if expected != found {
        return Err(BsmatError::ShapeMismatch { expected, found });
    }
    Ok(())
}

/// Validate a window `[start, start + len)` inside `[0, extent)`
///
/// Windows must be non-empty. The first and last index of the window are
/// reported individually so the error names the offending index.
pub fn check_window(start: usize, len: usize, extent: usize) -> Result<(), BsmatError> {
    if len == 0 {
        return Err(BsmatError::InvalidArgument("slice extents must be >= 1"));
    }
    check_index(start, extent)?;
    let last = start
        .checked_add(len - 1)
        .ok_or(BsmatError::InvalidArgument("slice extent overflows"))?;
    check_index(last, extent)
}

/// Validate a possibly-empty range `[start, start + len)` inside `[0, extent]`
pub fn check_range(start: usize, len: usize, extent: usize) -> Result<(), BsmatError> {
    let end = start
        .checked_add(len)
        .ok_or(BsmatError::InvalidArgument("range extent overflows"))?;
    if end > extent {
        return Err(BsmatError::IndexOutOfRange {
            index: end - 1,
            extent,
        });
    }
    Ok(())
}

/// Validate that a block of shape `inner` placed at `offset` fits in `outer`
pub fn check_placement(
    offset: (usize, usize),
    inner: (usize, usize),
    outer: (usize, usize),
) -> Result<(), BsmatError> {
    let rows = offset.0.checked_add(inner.0);
    let cols = offset.1.checked_add(inner.1);
    match (rows, cols) {
        (Some(r), Some(c)) if r <= outer.0 && c <= outer.1 => Ok(()),
        (Some(r), Some(c)) => Err(BsmatError::ShapeMismatch {
            expected: outer,
            found: (r, c),
        }),
        _ => Err(BsmatError::InvalidArgument("placement overflows")),
    }
}

/// Validate a dense seed array against the number of cells it must fill
///
/// An empty seed is accepted and means "all zero".
pub fn check_seed_len(seed_len: usize, cells: usize) -> Result<(), BsmatError> {
    if seed_len != 0 && seed_len != cells {
        return Err(BsmatError::InvalidArgument(
            "seed length must equal the number of cells",
        ));
    }
    Ok(())
}
