//! # Positional expansion
//!
//! Writing a value as a sequence of digits in a base.
//!
//! The base can be any rational number of absolute value other than one. Negative bases need no
//! sign for negative values. Bases between minus one and one are handled by expanding in the
//! reciprocal base, which mirrors the digits around the units place.
//!
//! For a base `p/q` with `|p| > q`, the digits are integers in `[0, |p|)`. An integer carry of `c`
//! out of a place subtracts `c·p` from that place and adds `c·q` to the next higher one, which
//! leaves the value unchanged.
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Signed, Zero};
use tracing::{debug, trace};

use crate::data::number_types::rational::{ONE, Rational, ZERO};
use crate::io::error::ExpansionError;


/// How many places below the units place long division explores while looking for a repeating
/// cycle.
///
/// When no cycle is found within this many places, the expansion is cut off and treated as
/// terminating.
pub const REPEAT_SEARCH_BUDGET: i64 = 100;

/// The digits of a finite value in some base.
///
/// A repeating cycle, when present, is always at the far end of its side: the highest places of
/// the integer digits (for bases below one), or the lowest places of the fraction digits.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PositionalExpansion {
    /// `Minus` only when a negative value is expanded in a positive base.
    pub sign: Sign,
    /// Digits for the places `base^0`, `base^1`, ..., least significant first. Never empty.
    pub integer_digits: Vec<BigInt>,
    /// Digits for the places `base^-1`, `base^-2`, ..., most significant first.
    pub fraction_digits: Vec<BigInt>,
    /// Length of the cycle at the high end of the integer digits.
    pub integer_repeat: Option<usize>,
    /// Length of the cycle at the low end of the fraction digits.
    pub fraction_repeat: Option<usize>,
}

impl Rational {
    /// Expand this value in a base.
    ///
    /// # Arguments
    ///
    /// * `base`: Any finite value of absolute value other than zero and one.
    ///
    /// # Errors
    ///
    /// When the base doesn't admit a positional system, or when this value is not finite.
    pub fn positional(&self, base: &Rational) -> Result<PositionalExpansion, ExpansionError> {
        if base.is_infinite() || base.is_zero() || base.absolute() == *ONE {
            return Err(ExpansionError::Base(base.clone()));
        }
        if !self.is_finite() {
            return Err(ExpansionError::NotFinite(self.clone()));
        }

        let Expansion { sign, places, integer_repeat, fraction_repeat } = expand(self, base);

        Ok(PositionalExpansion {
            sign,
            integer_digits: places.integer,
            fraction_digits: places.fraction.into_iter().skip(1).collect(),
            integer_repeat: (integer_repeat > 0).then_some(integer_repeat),
            fraction_repeat: (fraction_repeat > 0).then_some(fraction_repeat),
        })
    }
}

/// Digits indexed by position, the exponent of their place value.
///
/// Position zero, the units place, is stored at the start of both sides.
#[derive(Default, Debug)]
struct Places {
    integer: Vec<BigInt>,
    fraction: Vec<BigInt>,
}

impl Places {
    fn get(&self, position: i64) -> BigInt {
        let digits = if position >= 0 { &self.integer } else { &self.fraction };

        digits.get(position.unsigned_abs() as usize).cloned().unwrap_or_else(BigInt::zero)
    }

    fn set(&mut self, position: i64, digit: BigInt) {
        let index = position.unsigned_abs() as usize;
        if position >= 0 {
            *place(&mut self.integer, index) = digit.clone();
        }
        if position <= 0 {
            *place(&mut self.fraction, index) = digit;
        }
    }

    fn add(&mut self, position: i64, amount: &BigInt) {
        let digit = self.get(position) + amount;
        self.set(position, digit);
    }

    /// Position of the lowest fraction place.
    fn lowest(&self) -> i64 {
        -(self.fraction.len() as i64 - 1)
    }

    /// Drop the high integer zeros and, optionally, the low fraction zeros.
    ///
    /// The units place always stays.
    fn trim(&mut self, fraction: bool) {
        trim_zeros(&mut self.integer);
        if fraction {
            trim_zeros(&mut self.fraction);
        }
    }

    /// Mirror around the units place.
    fn swapped(self) -> Self {
        Self { integer: self.fraction, fraction: self.integer }
    }
}

fn place(digits: &mut Vec<BigInt>, index: usize) -> &mut BigInt {
    if digits.len() <= index {
        digits.resize(index + 1, BigInt::zero());
    }

    &mut digits[index]
}

fn trim_zeros(digits: &mut Vec<BigInt>) {
    while digits.len() > 1 && digits.last().is_some_and(Zero::is_zero) {
        digits.pop();
    }
}

/// Intermediate result, with repeat lengths of zero meaning no cycle.
struct Expansion {
    sign: Sign,
    places: Places,
    integer_repeat: usize,
    fraction_repeat: usize,
}

fn expand(value: &Rational, base: &Rational) -> Expansion {
    if value.is_negative() && base.is_positive() {
        return Expansion { sign: Sign::Minus, ..expand(&-value, base) };
    }

    if base.absolute() < *ONE {
        let Expansion { sign, places, integer_repeat, fraction_repeat } = expand(value, &base.reciprocal());
        return Expansion {
            sign,
            places: places.swapped(),
            integer_repeat: fraction_repeat,
            fraction_repeat: integer_repeat,
        };
    }

    let mut places = Places::default();
    places.set(0, value.numerator().clone());
    let highest = carry_integer(&mut places, base);

    let mut fraction_repeat = 0;
    if value.is_fractional() {
        let (lowest, repeat) = long_division(&mut places, highest, value.denominator(), base);
        fraction_repeat = repeat;
        normalize(&mut places, lowest, highest, &mut fraction_repeat, base);
    }
    places.trim(fraction_repeat == 0);

    Expansion {
        sign: if value.is_zero() { Sign::NoSign } else { Sign::Plus },
        places,
        integer_repeat: 0,
        fraction_repeat,
    }
}

/// How many times the base numerator should be carried out of a place.
///
/// Chosen such that what remains is non negative (when the base numerator is negative, this
/// rounds the quotient up for negative digits).
fn carry_count(digit: &BigInt, base_numerator: &BigInt) -> BigInt {
    let (quotient, remainder) = digit.div_rem(base_numerator);

    if remainder.is_negative() {
        quotient + 1
    } else {
        quotient
    }
}

/// Carry an integer in the units place upwards until every place holds a digit.
///
/// Returns the highest position written to.
fn carry_integer(places: &mut Places, base: &Rational) -> i64 {
    let mut position = 0;
    loop {
        let count = carry_count(&places.get(position), base.numerator());
        if count.is_zero() {
            break position;
        }

        places.add(position, &-(&count * base.numerator()));
        places.set(position + 1, count * base.denominator());
        position += 1;
    }
}

/// Divide the digits by `denominator`, starting at the highest place.
///
/// Returns the position at which the division stopped, together with the length of the cycle the
/// fraction digits end in (zero if none was found).
fn long_division(
    places: &mut Places,
    highest: i64,
    denominator: &BigInt,
    base: &Rational,
) -> (i64, usize) {
    let denominator = Rational::from(denominator.clone());
    let mut carry = ZERO.clone();
    // Carries seen from the units place down, a repeated one closes a cycle
    let mut remainders: Vec<Rational> = Vec::new();

    let mut position = highest;
    while position >= -REPEAT_SEARCH_BUDGET {
        let digit = &carry * base + Rational::from(places.get(position));
        carry = &digit % &denominator;
        let quotient = (digit - &carry) / &denominator;
        places.set(position, quotient.numerator().clone());

        if position <= 0 {
            if let Some(first) = remainders.iter().position(|remainder| remainder == &carry) {
                let length = remainders.len() - first;
                trace!(length, position, "found repeating cycle");
                return (position, length);
            }
            if carry.is_zero() {
                return (position, 0);
            }
            remainders.push(carry.clone());
        }

        position -= 1;
    }

    debug!(budget = REPEAT_SEARCH_BUDGET, "no repeating cycle found, cutting the expansion off");
    (position, 0)
}

/// Bring every place from `lowest` upwards into the digit range by carrying.
///
/// A carry out of the first place of the cycle flows both into the place above it and into the last
/// place of the cycle, because the cycle repeats below itself. The walk then continues from there.
fn normalize(
    places: &mut Places,
    mut position: i64,
    highest: i64,
    fraction_repeat: &mut usize,
    base: &Rational,
) {
    let mut wraps = 0;

    loop {
        let count = carry_count(&places.get(position), base.numerator());
        if position >= highest && count.is_zero() {
            break;
        }

        if !count.is_zero() {
            if *fraction_repeat == 1 && position == places.lowest() {
                // A one digit cycle can't carry into itself, unroll it once
                *fraction_repeat = 2;
                let last = places.get(position);
                places.fraction.push(last);
            }

            let carried = &count * base.denominator();
            places.add(position, &-(&count * base.numerator()));
            places.add(position + 1, &carried);

            if *fraction_repeat > 0 && position == places.lowest() + *fraction_repeat as i64 - 1 {
                position -= *fraction_repeat as i64;
                places.add(position + 1, &carried);

                wraps += 1;
                if wraps > REPEAT_SEARCH_BUDGET {
                    debug!(wraps, "carries keep cycling, stopping normalization");
                    break;
                }
            }
        }

        position += 1;
    }
}
