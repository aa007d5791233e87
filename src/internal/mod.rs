//! Internal modules ported from external libraries.
//!
//! These modules contain code adapted from:
//! - scipy: linear sum assignment
//! - numpy: cumulative sums and label counting

pub mod scipy;
pub mod numpy;
