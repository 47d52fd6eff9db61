//! # Error reporting
//!
//! Arithmetic on rational numbers is total, it never fails. The one operation that can is the
//! expansion of a value into digits: not every base admits a positional system, and only finite
//! values have digits.
use std::error::Error;
use std::fmt;

use crate::data::number_types::rational::Rational;

/// An `ExpansionError` is created when a value can't be written as digits in a base.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ExpansionError {
    /// The base is zero, infinite (or undefined) or of absolute value one.
    ///
    /// For these bases, the place values don't grow or shrink, so no value has a digit expansion.
    /// The contained value is the rejected base.
    Base(Rational),
    /// The value to expand is infinite or undefined.
    ///
    /// Formatting renders these as symbols instead, so this variant is only seen when expanding
    /// directly.
    NotFinite(Rational),
}

impl fmt::Display for ExpansionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExpansionError::Base(base) => write!(
                f,
                "Invalid base {}: a base can't be zero, infinite or of absolute value one",
                base,
            ),
            ExpansionError::NotFinite(value) => write!(f, "Value {} has no digits", value),
        }
    }
}

impl Error for ExpansionError {}
