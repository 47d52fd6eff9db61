//! # Storing of numbers in memory
//!
//! This module provides the data structures used to represent values. Algorithms that work on them
//! live in `algorithm`, conversions to text in `io`.
pub mod number_types;
