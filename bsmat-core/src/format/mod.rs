//! Wire format and engine definitions
//!
//! This module contains pure data structure definitions. No encoding is
//! performed here; the `serde` feature only derives the trait impls.

pub mod engine;
pub mod wire;

pub use engine::Engine;
pub use wire::{MatrixWire, VectorWire};
