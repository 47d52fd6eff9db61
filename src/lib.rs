//! # Exact numerals
//!
//! Exact rational arithmetic with total operations, rounding to any unit in twelve modes and
//! rendering of values as text: digits in any base (including negative and fractional bases, with
//! repeating cycles detected), fractions, scientific notation, Roman numerals and English words.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;
