//! # Number types
//!
//! All computation is exact. Floating point values are accepted as input, but they are converted to
//! the fraction they represent before anything is done with them.
pub mod rational;
