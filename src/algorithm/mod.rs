//! # Algorithms
//!
//! Computations on exact values that go beyond the arithmetic defined on the number types.
pub mod positional;
pub mod rounding;
