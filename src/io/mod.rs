//! # Reading and writing of numbers
//!
//! This module turns values into text: positional digits in any base, fractions, scientific
//! notation, Roman numerals and English words.
pub mod error;
pub mod format;
pub mod roman;
pub mod scientific;
pub mod word;
