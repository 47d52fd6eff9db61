//! # Rounding
//!
//! Moving a value to a multiple of a unit, in one of twelve ways.
//!
//! The modes come in two tiers. A directed mode picks one of the two multiples adjacent to the
//! value according to a `Policy`. A nearest mode picks the closest multiple, and only uses its
//! policy to break a tie when the value lies exactly halfway.
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;

use crate::data::number_types::rational::{HALF, ONE, Rational, UNDEFINED};


/// Which of the two adjacent multiples to choose.
///
/// Directions are relative to zero (`In`, `Out`) or to the number line (`Up`, `Down`). `Even` and
/// `Odd` choose by the parity of the multiple's quotient with the unit.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Policy {
    In,
    Out,
    Up,
    Down,
    Even,
    Odd,
}

/// How to round.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RoundMode {
    /// Choose between the two adjacent multiples using only the policy.
    Directed(Policy),
    /// Choose the nearest multiple, the policy only breaks exact ties.
    Nearest(Policy),
}

impl RoundMode {
    /// Truncate, towards zero.
    pub const IN: Self = Self::Directed(Policy::In);
    /// Away from zero.
    pub const OUT: Self = Self::Directed(Policy::Out);
    /// Ceiling.
    pub const UP: Self = Self::Directed(Policy::Up);
    /// Floor.
    pub const DOWN: Self = Self::Directed(Policy::Down);
    #[allow(missing_docs)]
    pub const EVEN: Self = Self::Directed(Policy::Even);
    #[allow(missing_docs)]
    pub const ODD: Self = Self::Directed(Policy::Odd);
    #[allow(missing_docs)]
    pub const HALF_IN: Self = Self::Nearest(Policy::In);
    /// Commercial rounding, ties away from zero.
    pub const HALF_OUT: Self = Self::Nearest(Policy::Out);
    #[allow(missing_docs)]
    pub const HALF_UP: Self = Self::Nearest(Policy::Up);
    #[allow(missing_docs)]
    pub const HALF_DOWN: Self = Self::Nearest(Policy::Down);
    /// Banker's rounding.
    pub const HALF_EVEN: Self = Self::Nearest(Policy::Even);
    #[allow(missing_docs)]
    pub const HALF_ODD: Self = Self::Nearest(Policy::Odd);

    /// All modes, directed ones first.
    pub const ALL: [Self; 12] = [
        Self::IN, Self::OUT, Self::UP, Self::DOWN, Self::EVEN, Self::ODD,
        Self::HALF_IN, Self::HALF_OUT, Self::HALF_UP, Self::HALF_DOWN, Self::HALF_EVEN, Self::HALF_ODD,
    ];
}

impl Default for RoundMode {
    fn default() -> Self {
        Self::HALF_OUT
    }
}

impl Policy {
    /// Whether the truncated quotient is kept, rather than moved one step away from zero.
    ///
    /// # Arguments
    ///
    /// * `negative`: Whether the (non integer) quotient being rounded is negative.
    /// * `truncated`: That quotient, truncated towards zero.
    fn keeps_truncated(self, negative: bool, truncated: &BigInt) -> bool {
        match self {
            Policy::In => true,
            Policy::Out => false,
            Policy::Up => negative,
            Policy::Down => !negative,
            Policy::Even => truncated.is_even(),
            Policy::Odd => truncated.is_odd(),
        }
    }
}

impl Rational {
    /// Round to a multiple of `unit`.
    ///
    /// Infinite and undefined values are returned unchanged. A unit that isn't a positive finite
    /// value makes the result undefined.
    ///
    /// # Arguments
    ///
    /// * `mode`: Which multiple to choose.
    /// * `unit`: Positive step size, the result is an integer multiple of it.
    pub fn round(&self, mode: RoundMode, unit: &Rational) -> Rational {
        if self.is_infinite() {
            return self.clone();
        }
        if !unit.is_positive() || unit.is_infinite() {
            return UNDEFINED.clone();
        }

        let mut scaled = self / unit;
        if scaled.is_integer() {
            return scaled * unit;
        }

        let policy = match mode {
            RoundMode::Directed(policy) => policy,
            RoundMode::Nearest(policy) if scaled.denominator() == &BigInt::from(2) => policy,
            RoundMode::Nearest(_) => {
                // Flooring after shifting by a half rounds to the nearest multiple
                scaled += &*HALF;
                Policy::Down
            }
        };

        let truncated = scaled.numerator() / scaled.denominator();
        let negative = scaled.is_negative();
        let chosen = if policy.keeps_truncated(negative, &truncated) {
            truncated
        } else if negative {
            truncated - BigInt::one()
        } else {
            truncated + BigInt::one()
        };

        Rational::from(chosen) * unit
    }

    /// Round towards zero.
    pub fn truncate(&self, unit: &Rational) -> Rational {
        self.round(RoundMode::IN, unit)
    }

    /// Round down.
    pub fn floor(&self, unit: &Rational) -> Rational {
        self.round(RoundMode::DOWN, unit)
    }

    /// Round up.
    pub fn ceiling(&self, unit: &Rational) -> Rational {
        self.round(RoundMode::UP, unit)
    }

    /// Integer part, rounded towards zero.
    pub fn integer_part(&self) -> Rational {
        self.truncate(&ONE)
    }
}
