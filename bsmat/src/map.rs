//! Dual hash-map engine
//!
//! Set bits are kept twice: once under their row and once under their
//! column, so row and column extraction both cost one lookup. The same
//! [`DualMap`] is the backing store of the windowed engine.

mod dual;
mod matrix;
mod vector;

pub use dual::DualMap;
pub use matrix::MapMatrix;
pub use vector::MapVector;
