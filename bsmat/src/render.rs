//! Text rendering shared by the `Display` impls
//!
//! One line per row, bits separated by a single space, no trailing newline.

use std::fmt;

use bsmat_core::{SparseMatrix, SparseVector};

fn write_bits(f: &mut fmt::Formatter<'_>, len: usize, support: &[usize]) -> fmt::Result {
    let mut next = support.iter().peekable();
    for i in 0..len {
        if i > 0 {
            f.write_str(" ")?;
        }
        if next.peek() == Some(&&i) {
            next.next();
            f.write_str("1")?;
        } else {
            f.write_str("0")?;
        }
    }
    Ok(())
}

pub(crate) fn render_matrix(m: &dyn SparseMatrix, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let (rows, cols) = m.dims();
    for r in 0..rows {
        if r > 0 {
            f.write_str("\n")?;
        }
        write_bits(f, cols, &m.row_support(r))?;
    }
    Ok(())
}

pub(crate) fn render_vector(v: &dyn SparseVector, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_bits(f, v.len(), &v.nonzero_indices())
}
