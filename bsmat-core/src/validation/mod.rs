//! Argument and payload validation
//!
//! This module contains pure validation functions with no storage
//! dependencies. All engines route their argument checks through here.

pub mod bounds;
pub mod coordinates;

pub use bounds::{
    check_index, check_placement, check_position, check_range, check_same_shape,
    check_seed_len, check_window,
};
pub use coordinates::{validate_coordinates, validate_indices};
