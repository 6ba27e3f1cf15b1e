//! Abstract interfaces shared by every storage engine
//!
//! Traits here define the contract; generic algorithms backing their
//! default methods live in [`crate::ops`].

pub mod matrix;
pub mod region;
pub mod vector;

pub use matrix::{MatrixOperations, SparseMatrix};
pub use region::{regions_overlap, StorageRegion};
pub use vector::{SparseVector, VectorOperations};
