//! # Arithmetic and comparison
//!
//! Standard operations on the rational type. The operations are implemented once on references;
//! the variants taking operands by value forward to those.

/// Implement the by-value variants of a binary operator, given the implementation on references.
macro_rules! forward_binary {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                $trait::$method(&self, &rhs)
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Self::Output {
                $trait::$method(&self, rhs)
            }
        }

        impl $trait<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                $trait::$method(self, &rhs)
            }
        }

        impl $assign_trait<Rational> for Rational {
            fn $assign_method(&mut self, rhs: Rational) {
                *self = $trait::$method(&*self, &rhs);
            }
        }

        impl $assign_trait<&Rational> for Rational {
            fn $assign_method(&mut self, rhs: &Rational) {
                *self = $trait::$method(&*self, rhs);
            }
        }
    };
}

mod field {
    use std::iter::{Product, Sum};
    use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

    use num_bigint::Sign;

    use crate::data::number_types::rational::{ONE, Rational, TWO, ZERO};

    impl Neg for &Rational {
        type Output = Rational;

        fn neg(self) -> Self::Output {
            Rational {
                numerator: -&self.numerator,
                denominator: self.denominator.clone(),
            }
        }
    }

    impl Neg for Rational {
        type Output = Rational;

        fn neg(self) -> Self::Output {
            Rational {
                numerator: -self.numerator,
                denominator: self.denominator,
            }
        }
    }

    impl Add for &Rational {
        type Output = Rational;

        /// Cross multiplying would turn the sum of an infinity with itself into `0/0`, so equal
        /// operands are doubled instead.
        fn add(self, rhs: Self) -> Self::Output {
            if self == rhs {
                return self * &*TWO;
            }

            Rational::canonical(
                &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
                &self.denominator * &rhs.denominator,
            )
        }
    }
    forward_binary!(Add, add, AddAssign, add_assign);

    impl Sub for &Rational {
        type Output = Rational;

        fn sub(self, rhs: Self) -> Self::Output {
            self + &-rhs
        }
    }
    forward_binary!(Sub, sub, SubAssign, sub_assign);

    impl Mul for &Rational {
        type Output = Rational;

        fn mul(self, rhs: Self) -> Self::Output {
            Rational::canonical(
                &self.numerator * &rhs.numerator,
                &self.denominator * &rhs.denominator,
            )
        }
    }
    forward_binary!(Mul, mul, MulAssign, mul_assign);

    impl Div for &Rational {
        type Output = Rational;

        fn div(self, rhs: Self) -> Self::Output {
            self * &rhs.reciprocal()
        }
    }
    forward_binary!(Div, div, DivAssign, div_assign);

    impl Rem for &Rational {
        type Output = Rational;

        /// Remainder after subtracting the floored quotient times the modulus.
        ///
        /// The result has the sign of the modulus. A finite value modulo an infinity is the value
        /// itself when the signs agree (or the value is zero), and the infinity otherwise.
        fn rem(self, modulus: Self) -> Self::Output {
            if self.is_finite() && modulus.is_infinite() {
                return if modulus.is_undefined() || self.sign() * modulus.sign() == Sign::Minus {
                    modulus.clone()
                } else {
                    self.clone()
                };
            }

            self - (self / modulus).floor(&ONE) * modulus
        }
    }
    forward_binary!(Rem, rem, RemAssign, rem_assign);

    impl Sum for Rational {
        fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(ZERO.clone(), |total, item| total + item)
        }
    }

    impl<'a> Sum<&'a Rational> for Rational {
        fn sum<I: Iterator<Item=&'a Rational>>(iter: I) -> Self {
            iter.fold(ZERO.clone(), |total, item| total + item)
        }
    }

    impl Product for Rational {
        fn product<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(ONE.clone(), |total, item| total * item)
        }
    }
}

mod power {
    use num_traits::Pow;

    use crate::data::number_types::rational::Rational;

    impl Pow<i32> for &Rational {
        type Output = Rational;

        fn pow(self, exponent: i32) -> Self::Output {
            self.power(exponent)
        }
    }

    impl Pow<i32> for Rational {
        type Output = Rational;

        fn pow(self, exponent: i32) -> Self::Output {
            self.power(exponent)
        }
    }
}

mod compare {
    use std::cmp::Ordering;

    use crate::data::number_types::rational::Rational;

    /// Values are compared by cross multiplication, which is valid because denominators are never
    /// negative.
    ///
    /// Pairs for which cross multiplication gives no answer are incomparable: the undefined value
    /// against anything but itself, and the two infinities against each other.
    impl PartialOrd for Rational {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            if self == other {
                return Some(Ordering::Equal);
            }

            let left = &self.numerator * &other.denominator;
            let right = &other.numerator * &self.denominator;
            match left.cmp(&right) {
                Ordering::Equal => None,
                ordering => Some(ordering),
            }
        }
    }
}
