//! Compact coordinate engine
//!
//! Set bits are stored as two parallel arrays sorted by row and, within a
//! row, by column. Lookups are binary searches; every mutation shifts the
//! arrays in place through the splice helpers in `bsmat_core::index`.
//! Slices, rows, columns and transposes are independent copies.

mod matrix;
mod vector;

pub use matrix::CompactMatrix;
pub use vector::CompactVector;
