//! # Scientific notation
//!
//! Writing a value as a mantissa between one and ten, times a power of ten.
use std::fmt;

use crate::algorithm::rounding::RoundMode;
use crate::data::number_types::rational::{NEGATIVE_ONE, ONE, Rational, TEN, THOUSANDTH};
use crate::io::format::{DigitOptions, FormatOptions};

/// Number of fraction digits shown when displaying.
const SHOWN_FRACTION_DIGITS: usize = 3;

/// A value split into a mantissa and a decimal exponent.
///
/// For finite nonzero values, the magnitude of the mantissa lies in `[1, 10)`. Zero, the
/// infinities and the undefined value have no exponent, the mantissa is the value itself.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Scientific {
    /// Exact, not rounded.
    pub mantissa: Rational,
    #[allow(missing_docs)]
    pub exponent: Option<i64>,
}

/// Split a value into a mantissa and a decimal exponent.
pub fn scientific_notation(value: &Rational) -> Scientific {
    Scientific::new(value)
}

impl Scientific {
    /// Split a value into a mantissa and a decimal exponent.
    pub fn new(value: &Rational) -> Self {
        if value.is_negative() {
            let Self { mantissa, exponent } = Self::new(&-value);
            return Self { mantissa: -mantissa, exponent };
        }
        if value.is_infinite() || value.is_zero() {
            return Self { mantissa: value.clone(), exponent: None };
        }

        let mut mantissa = value.clone();
        let mut exponent = 0;
        while mantissa < *ONE {
            mantissa *= &*TEN;
            exponent -= 1;
        }
        while mantissa >= *TEN {
            mantissa /= &*TEN;
            exponent += 1;
        }

        Self { mantissa, exponent: Some(exponent) }
    }

    /// Round the mantissa.
    ///
    /// When the rounded mantissa reaches ten, it becomes one and the exponent goes up.
    pub fn rounded(&self, mode: RoundMode, unit: &Rational) -> Self {
        let mantissa = self.mantissa.round(mode, unit);

        match self.exponent {
            Some(exponent) if mantissa.absolute() >= *TEN => Self {
                mantissa: if mantissa.is_negative() { NEGATIVE_ONE.clone() } else { ONE.clone() },
                exponent: Some(exponent + 1),
            },
            exponent => Self { mantissa, exponent },
        }
    }
}

/// The mantissa rounded to three decimals, like `1.235 × 10^3`.
impl fmt::Display for Scientific {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Self { mantissa, exponent } = self.rounded(RoundMode::HALF_OUT, &THOUSANDTH);

        let options = FormatOptions {
            fraction: DigitOptions {
                min_digits: Some(SHOWN_FRACTION_DIGITS),
                max_digits: Some(SHOWN_FRACTION_DIGITS),
                ..DigitOptions::default()
            },
            ..FormatOptions::default()
        };
        let mantissa = mantissa.to_positional(&options).map_err(|_| fmt::Error)?;

        match exponent {
            Some(exponent) => write!(f, "{} × 10^{}", mantissa, exponent),
            None => write!(f, "{}", mantissa),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::rounding::RoundMode;
    use crate::data::number_types::rational::{HUNDREDTH, INFINITY, NEGATIVE_INFINITY, ONE, UNDEFINED};
    use crate::io::scientific::{Scientific, scientific_notation};
    use crate::R;

    #[test]
    fn split() {
        assert_eq!(scientific_notation(&R!(1234)), Scientific { mantissa: R!(1234, 1000), exponent: Some(3) });
        assert_eq!(scientific_notation(&R!(1)), Scientific { mantissa: R!(1), exponent: Some(0) });
        assert_eq!(scientific_notation(&R!(10)), Scientific { mantissa: R!(1), exponent: Some(1) });
        assert_eq!(scientific_notation(&R!(1, 3)), Scientific { mantissa: R!(10, 3), exponent: Some(-1) });
        assert_eq!(scientific_notation(&R!(-1, 400)), Scientific { mantissa: R!(-5, 2), exponent: Some(-3) });
        assert_eq!(scientific_notation(&R!(99, 10)), Scientific { mantissa: R!(99, 10), exponent: Some(0) });
    }

    #[test]
    fn special_values() {
        for value in [R!(0), INFINITY.clone(), NEGATIVE_INFINITY.clone(), UNDEFINED.clone()] {
            assert_eq!(scientific_notation(&value), Scientific { mantissa: value.clone(), exponent: None });
        }
    }

    #[test]
    fn rounding() {
        let rolled = scientific_notation(&R!(99999)).rounded(RoundMode::HALF_OUT, &HUNDREDTH);
        assert_eq!(rolled, Scientific { mantissa: R!(1), exponent: Some(5) });

        let rolled = scientific_notation(&R!(-9996, 1000)).rounded(RoundMode::HALF_OUT, &HUNDREDTH);
        assert_eq!(rolled, Scientific { mantissa: R!(-1), exponent: Some(1) });

        let kept = scientific_notation(&R!(99999)).rounded(RoundMode::DOWN, &ONE);
        assert_eq!(kept, Scientific { mantissa: R!(9), exponent: Some(4) });
    }

    #[test]
    fn display() {
        assert_eq!(Scientific::new(&R!(1234)).to_string(), "1.234 × 10^3");
        assert_eq!(Scientific::new(&R!(12345)).to_string(), "1.235 × 10^4");
        assert_eq!(Scientific::new(&R!(2, 3)).to_string(), "6.667 × 10^-1");
        assert_eq!(Scientific::new(&R!(-7)).to_string(), "-7.000 × 10^0");
        assert_eq!(Scientific::new(&R!(99999, 10000)).to_string(), "1.000 × 10^1");
        assert_eq!(Scientific::new(&R!(0)).to_string(), "0.000");
        assert_eq!(Scientific::new(&NEGATIVE_INFINITY).to_string(), "-∞");
        assert_eq!(Scientific::new(&UNDEFINED).to_string(), "NAN");
    }
}
