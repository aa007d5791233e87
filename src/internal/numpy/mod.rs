//! NumPy functions port.
//!
//! Only the handful of array helpers the slot index and result decoder need.

mod array;

pub use array::*;
