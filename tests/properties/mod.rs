//! # Properties
//!
//! Laws that hold for all values, checked on generated inputs.
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use proptest::prelude::*;

use numerals::algorithm::positional::PositionalExpansion;
use numerals::algorithm::rounding::RoundMode;
use numerals::data::number_types::rational::{
    HALF, INFINITY, NEGATIVE_INFINITY, ONE, Rational, TEN, UNDEFINED, ZERO,
};
use numerals::io::scientific::scientific_notation;
use numerals::R;

fn finite() -> impl Strategy<Value = Rational> {
    (-100_000i64..100_000, 1i64..10_000).prop_map(|(numerator, denominator)| R!(numerator, denominator))
}

fn any_value() -> impl Strategy<Value = Rational> {
    prop_oneof![
        8 => finite(),
        1 => Just(INFINITY.clone()),
        1 => Just(NEGATIVE_INFINITY.clone()),
        1 => Just(UNDEFINED.clone()),
        1 => Just(ZERO.clone()),
    ]
}

fn mode() -> impl Strategy<Value = RoundMode> {
    (0..RoundMode::ALL.len()).prop_map(|index| RoundMode::ALL[index])
}

fn integer_base() -> impl Strategy<Value = i64> {
    prop_oneof![-36i64..=-2, 2i64..=36]
}

/// Sum of the digits times the powers of the base.
fn evaluate(expansion: &PositionalExpansion, base: &Rational) -> Rational {
    let integer = expansion.integer_digits.iter().enumerate()
        .map(|(i, digit)| R!(digit.clone()) * base.power(i as i32));
    let fraction = expansion.fraction_digits.iter().enumerate()
        .map(|(i, digit)| R!(digit.clone()) * base.power(-(i as i32) - 1));
    let magnitude: Rational = integer.chain(fraction).sum();

    if expansion.sign == Sign::Minus { -magnitude } else { magnitude }
}

proptest! {
    #[test]
    fn canonical(numerator in any::<i64>(), denominator in any::<i64>().prop_filter("nonzero", |d| *d != 0)) {
        let value = R!(numerator, denominator);

        prop_assert!(value.denominator().is_positive());
        prop_assert!(value.numerator().gcd(value.denominator()).is_one());
        prop_assert_eq!(value, R!(BigInt::from(numerator)) / R!(BigInt::from(denominator)));
    }

    #[test]
    fn total(a in any_value(), b in any_value()) {
        let results = [&a + &b, &a - &b, &a * &b, &a / &b, &a % &b, a.reciprocal(), a.absolute()];
        for result in results {
            prop_assert!(result.denominator() >= &BigInt::zero());
        }
        let _ = a.partial_cmp(&b);
        let _ = a == b;
    }

    #[test]
    fn identities(x in finite()) {
        prop_assert_eq!(&x + &*ZERO, x.clone());
        prop_assert_eq!(&x * &*ONE, x.clone());
        prop_assert_eq!(&x - &x, ZERO.clone());
        if !x.is_zero() {
            prop_assert_eq!(&x / &x, ONE.clone());
        }
    }

    #[test]
    fn trichotomy(a in finite(), b in finite()) {
        let holding = [a < b, a == b, a > b].into_iter().filter(|&holds| holds).count();
        prop_assert_eq!(holding, 1);
    }

    #[test]
    fn rounds_to_multiples(x in finite(), mode in mode(), unit in finite().prop_filter("positive", Rational::is_positive)) {
        let rounded = x.round(mode, &unit);

        prop_assert!((&rounded / &unit).is_integer());
        prop_assert!((&rounded - &x).absolute() < unit);
    }

    #[test]
    fn halves_round_to_even(k in -10_000i64..10_000) {
        let half = R!(2 * k + 1, 2);
        let rounded = half.round(RoundMode::HALF_EVEN, &ONE);

        prop_assert!(rounded.is_even());
        prop_assert_eq!((&rounded - &half).absolute(), HALF.clone());
    }

    #[test]
    fn digits_in_range(x in finite(), base in integer_base()) {
        let expansion = x.positional(&R!(base)).unwrap();
        let limit = BigInt::from(base.abs());

        for digit in expansion.integer_digits.iter().chain(&expansion.fraction_digits) {
            prop_assert!(!digit.is_negative());
            prop_assert!(digit < &limit);
        }
    }

    #[test]
    fn terminating_expansions_are_exact(numerator in -100_000i64..100_000, places in 0i32..5, base in integer_base()) {
        let base = R!(base);
        let value = R!(numerator) / base.absolute().power(places);
        let expansion = value.positional(&base).unwrap();

        prop_assert_eq!(expansion.integer_repeat, None);
        prop_assert_eq!(expansion.fraction_repeat, None);
        prop_assert_eq!(evaluate(&expansion, &base), value);
    }

    #[test]
    fn mantissa_range(x in finite().prop_filter("nonzero", |x| !x.is_zero())) {
        let scientific = scientific_notation(&x);
        let mantissa = scientific.mantissa.absolute();

        prop_assert!(mantissa >= *ONE && mantissa < *TEN);
        prop_assert!(scientific.exponent.is_some());
        prop_assert_eq!(&scientific.mantissa * &TEN.power(scientific.exponent.unwrap_or(0) as i32), x);
    }
}
