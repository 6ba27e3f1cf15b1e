#![no_std]

//! bsmat core - GF(2) sparse matrix definitions
//!
//! This crate provides the error type, the engine-independent contract
//! traits and the index utilities shared by every storage engine in
//! `bsmat`. Values are bits: addition is XOR and multiplication is AND.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod format;
pub mod index;
pub mod ops;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use traits::*;
