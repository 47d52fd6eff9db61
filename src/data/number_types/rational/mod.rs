//! # Rational numbers
//!
//! Primary way to do exact computation.
//!
//! A `Rational` is a fraction of two arbitrary size integers that is always kept in canonical form:
//! the denominator is never negative and the fraction is in lowest terms. Next to the finite
//! values, the type can represent the two signed infinities (`±1/0`) and an undefined value
//! (`0/0`). This makes all arithmetic total: dividing by zero doesn't panic, it produces one of
//! these sentinels, which then propagate through later computations.
use std::fmt;
use std::sync::LazyLock;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};

mod float;
mod wrapping;
mod macros;

/// An exact fraction, possibly infinite or undefined.
///
/// Instances are never mutated by the operations defined on them; every operation creates a new
/// value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

/// The indeterminate value `0/0`.
pub static UNDEFINED: LazyLock<Rational> = LazyLock::new(|| Rational::new(0, 0));
/// Additive identity.
pub static ZERO: LazyLock<Rational> = LazyLock::new(|| Rational::new(0, 1));
#[allow(missing_docs)]
pub static THOUSANDTH: LazyLock<Rational> = LazyLock::new(|| Rational::new(1, 1000));
#[allow(missing_docs)]
pub static HUNDREDTH: LazyLock<Rational> = LazyLock::new(|| Rational::new(1, 100));
#[allow(missing_docs)]
pub static TENTH: LazyLock<Rational> = LazyLock::new(|| Rational::new(1, 10));
#[allow(missing_docs)]
pub static HALF: LazyLock<Rational> = LazyLock::new(|| Rational::new(1, 2));
/// Multiplicative identity.
pub static ONE: LazyLock<Rational> = LazyLock::new(|| Rational::new(1, 1));
#[allow(missing_docs)]
pub static TWO: LazyLock<Rational> = LazyLock::new(|| Rational::new(2, 1));
#[allow(missing_docs)]
pub static TEN: LazyLock<Rational> = LazyLock::new(|| Rational::new(10, 1));
#[allow(missing_docs)]
pub static HUNDRED: LazyLock<Rational> = LazyLock::new(|| Rational::new(100, 1));
#[allow(missing_docs)]
pub static THOUSAND: LazyLock<Rational> = LazyLock::new(|| Rational::new(1000, 1));
/// Positive infinity, `1/0`.
pub static INFINITY: LazyLock<Rational> = LazyLock::new(|| Rational::new(1, 0));
#[allow(missing_docs)]
pub static NEGATIVE_ONE: LazyLock<Rational> = LazyLock::new(|| Rational::new(-1, 1));
/// Negative infinity, `-1/0`.
pub static NEGATIVE_INFINITY: LazyLock<Rational> = LazyLock::new(|| Rational::new(-1, 0));

impl Rational {
    /// Create a new instance from a numerator and a denominator.
    ///
    /// The fraction doesn't need to be in canonical form, and the denominator may be zero.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any integer.
    /// * `denominator`: Any integer, including zero or negative values.
    pub fn new<N: Into<BigInt>, D: Into<BigInt>>(numerator: N, denominator: D) -> Self {
        Self::canonical(numerator.into(), denominator.into())
    }

    /// Create a new instance from a quotient of two floating point numbers.
    ///
    /// Both floats are converted exactly, so `from_floats(0.1, 1.)` is not equal to `1/10` but to
    /// the binary fraction closest to it.
    pub fn from_floats(numerator: f64, denominator: f64) -> Self {
        let (numerator_numerator, numerator_denominator) = float::as_fraction(numerator);
        let (denominator_numerator, denominator_denominator) = float::as_fraction(denominator);

        Self::canonical(
            numerator_numerator * denominator_denominator,
            numerator_denominator * denominator_numerator,
        )
    }

    /// Bring a raw numerator and denominator pair into canonical form.
    fn canonical(mut numerator: BigInt, mut denominator: BigInt) -> Self {
        if numerator.is_zero() {
            let denominator = if denominator.is_zero() { BigInt::zero() } else { BigInt::one() };
            return Self { numerator, denominator };
        }

        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        if denominator.is_zero() {
            let numerator = if numerator.is_negative() { -BigInt::one() } else { BigInt::one() };
            return Self { numerator, denominator };
        }

        let gcd = numerator.gcd(&denominator);
        Self {
            numerator: numerator / &gcd,
            denominator: denominator / gcd,
        }
    }

    /// Numerator of the canonical form, carries the sign.
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Denominator of the canonical form, never negative.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Sign of the value; the undefined value has no sign.
    pub fn sign(&self) -> Sign {
        self.numerator.sign()
    }

    /// Whether the numerator is zero.
    ///
    /// Note that this includes the undefined value.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    #[allow(missing_docs)]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    #[allow(missing_docs)]
    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    /// Whether the value is an integer.
    ///
    /// Infinities and the undefined value are not integers.
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Whether the value is an integer that is divisible by two.
    pub fn is_even(&self) -> bool {
        (self * &*HALF).is_integer()
    }

    /// Whether the value is an integer that is not divisible by two.
    pub fn is_odd(&self) -> bool {
        (self * &*HALF).denominator == BigInt::from(2)
    }

    /// Whether the value is finite but not an integer.
    pub fn is_fractional(&self) -> bool {
        self.denominator > BigInt::one()
    }

    #[allow(missing_docs)]
    pub fn is_finite(&self) -> bool {
        self.denominator.is_positive()
    }

    /// Whether the denominator is zero.
    ///
    /// Note that this includes the undefined value.
    pub fn is_infinite(&self) -> bool {
        self.denominator.is_zero()
    }

    #[allow(missing_docs)]
    pub fn is_undefined(&self) -> bool {
        self.numerator.is_zero() && self.denominator.is_zero()
    }

    /// Additive inverse.
    pub fn negative(&self) -> Self {
        -self
    }

    #[allow(missing_docs)]
    pub fn absolute(&self) -> Self {
        if self.is_negative() {
            self.negative()
        } else {
            self.clone()
        }
    }

    /// Multiplicative inverse.
    ///
    /// The reciprocal of zero is positive infinity, the reciprocal of both infinities is zero and
    /// the reciprocal of the undefined value is undefined.
    pub fn reciprocal(&self) -> Self {
        Self::canonical(self.denominator.clone(), self.numerator.clone())
    }

    /// Raise to an integer power.
    ///
    /// A negative exponent raises the reciprocal to the magnitude of the exponent.
    pub fn power(&self, exponent: i32) -> Self {
        let magnitude = exponent.unsigned_abs();
        let numerator = self.numerator.pow(magnitude);
        let denominator = self.denominator.pow(magnitude);

        if exponent < 0 {
            Self::canonical(denominator, numerator)
        } else {
            Self::canonical(numerator, denominator)
        }
    }

    /// Lossy conversion, meant for consumers that don't need exact values.
    pub fn to_float(&self) -> f64 {
        let numerator = self.numerator.to_f64().unwrap_or(f64::NAN);
        let denominator = self.denominator.to_f64().unwrap_or(f64::NAN);

        numerator / denominator
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                fn from(value: $t) -> Self {
                    Self { numerator: value.into(), denominator: BigInt::one() }
                }
            }
        )*
    };
}
from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt);

impl From<f64> for Rational {
    fn from(value: f64) -> Self {
        let (numerator, denominator) = float::as_fraction(value);
        Self::canonical(numerator, denominator)
    }
}

impl FromPrimitive for Rational {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_f64(n: f64) -> Option<Self> {
        Some(Self::from(n))
    }
}

/// Conversions to integers truncate towards zero; values that are not finite can't be converted.
impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        if self.is_finite() {
            (&self.numerator / &self.denominator).to_i64()
        } else {
            None
        }
    }

    fn to_u64(&self) -> Option<u64> {
        if self.is_finite() {
            (&self.numerator / &self.denominator).to_u64()
        } else {
            None
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.to_float())
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        ZERO.clone()
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl One for Rational {
    fn one() -> Self {
        ONE.clone()
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
