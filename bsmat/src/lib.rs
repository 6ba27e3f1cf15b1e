//! bsmat - GF(2) sparse matrices and vectors
//!
//! Every value holds bits: addition is XOR, multiplication is AND, and row
//! or column sums are taken mod 2. Three storage engines implement one
//! contract, and every binary operation accepts operands of any engine.
//!
//! ## Architecture
//!
//! bsmat follows a definitions/implementation separation:
//!
//! - **bsmat-core**: error type, contract traits, index utilities and the
//!   wire format (no_std)
//! - **bsmat**: the storage engines, runtime engine selection and JSON
//!
//! ## Engines
//!
//! - [`CompactMatrix`] / [`CompactVector`]: sorted parallel coordinate
//!   arrays, binary search and in-place splicing
//! - [`MapMatrix`] / [`MapVector`]: row and column hash maps kept in sync
//! - [`WindowedMatrix`] / [`WindowedVector`]: zero-copy slices, transposes,
//!   rows and columns over a shared store; writes through a view reach the
//!   parent
//!
//! ## Quick Start
//!
//! ```rust
//! use bsmat::{CompactMatrix, MatrixOperations, SparseMatrix, WindowedMatrix};
//!
//! fn example() -> bsmat::Result<()> {
//!     let mut m = CompactMatrix::identity(3);
//!     m.add_rows(0, 1, 2)?;
//!     assert_eq!(m.row_support(2), vec![0, 1]);
//!
//!     // Windows alias their parent
//!     let w = WindowedMatrix::identity(4);
//!     let mut block = w.slice(2, 2, 2, 2)?.t();
//!     block.set(0, 1, 1)?;
//!     assert_eq!(w.at(3, 2)?, 1);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub use bsmat_core::{
    // Contract traits
    MatrixOperations, SparseMatrix, SparseVector, StorageRegion, VectorOperations,
    // Format definitions
    Engine, MatrixWire, VectorWire,
    // Error handling
    BsmatError, ErrorCategory, Result,
};

pub mod compact;
pub mod config;
pub mod dynamic;
#[cfg(feature = "serde")]
pub mod json;
pub mod map;
mod render;
pub mod windowed;

pub use compact::{CompactMatrix, CompactVector};
pub use config::EngineConfig;
pub use dynamic::{AnyMatrix, AnyVector};
pub use map::{DualMap, MapMatrix, MapVector};
pub use windowed::{WindowedMatrix, WindowedVector};

#[cfg(feature = "serde")]
pub use json::{matrix_from_json, matrix_to_json, to_json, vector_from_json, vector_to_json};
