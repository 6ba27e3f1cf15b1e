//! Windowed engine: zero-copy views over a shared store
//!
//! A [`WindowedMatrix`] is a rectangle over a reference-counted
//! [`DualMap`](crate::map::DualMap) plus an orientation flag. Slices,
//! transposes, rows and columns are new windows over the same store, so a
//! write through any of them is visible through every overlapping window.
//! Only the constructors and [`WindowedMatrix::deep_copy`] allocate a store.
//!
//! Windows are `!Send` and `!Sync`: the store is an `Rc<RefCell<_>>`.

mod matrix;
mod store;
mod vector;

pub use matrix::WindowedMatrix;
pub use vector::WindowedVector;
