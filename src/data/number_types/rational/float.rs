//! # Exact conversion of binary floating point numbers
//!
//! Every finite `f64` is a dyadic fraction. Reading the fields of its bit pattern directly gives
//! that fraction without any rounding.
use num_bigint::BigInt;
use num_traits::{One, Zero};

const MANTISSA_BITS: u32 = 52;
const EXPONENT_MASK: u64 = 0x7ff;
const EXPONENT_BIAS: i64 = 1023;
/// Scale of the subnormal numbers, `2^(1 - 1023 - 52)`.
const SUBNORMAL_SHIFT: usize = 1074;

/// Decompose a float into a (not necessarily canonical) numerator and denominator.
///
/// Infinities map to `±1/0`, all NaN values to `0/0`.
pub(super) fn as_fraction(value: f64) -> (BigInt, BigInt) {
    let bits = value.to_bits();
    let negative = bits >> 63 == 1;
    let raw_exponent = (bits >> MANTISSA_BITS) & EXPONENT_MASK;
    let raw_mantissa = bits & ((1 << MANTISSA_BITS) - 1);

    let signed = |magnitude: BigInt| if negative { -magnitude } else { magnitude };

    match (raw_exponent, raw_mantissa) {
        (0, 0) => (BigInt::zero(), BigInt::one()),
        (0, mantissa) => (signed(BigInt::from(mantissa)), BigInt::one() << SUBNORMAL_SHIFT),
        (EXPONENT_MASK, 0) => (signed(BigInt::one()), BigInt::zero()),
        (EXPONENT_MASK, _) => (BigInt::zero(), BigInt::zero()),
        (exponent, mantissa) => {
            let numerator = signed(BigInt::from((1 << MANTISSA_BITS) | mantissa));
            let denominator = BigInt::one() << MANTISSA_BITS;

            let exponent = exponent as i64 - EXPONENT_BIAS;
            let shift = exponent.unsigned_abs() as usize;
            if exponent < 0 {
                (numerator, denominator << shift)
            } else {
                (numerator << shift, denominator)
            }
        }
    }
}
