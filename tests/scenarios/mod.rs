//! # Worked examples
//!
//! Values written in a range of bases, and the other numeral systems, checked against known
//! renderings.
use numerals::algorithm::rounding::RoundMode;
use numerals::data::number_types::rational::{HALF, Rational};
use numerals::io::format::{DigitOptions, FormatOptions};
use numerals::io::roman::roman_numeral;
use numerals::io::scientific::scientific_notation;
use numerals::io::word::word;
use numerals::R;

fn check(base: Rational, cases: &[((i64, i64), &str)]) {
    let options = FormatOptions::with_base(base.clone());
    for &((numerator, denominator), expected) in cases {
        let value = R!(numerator, denominator);
        assert_eq!(
            value.to_positional(&options).unwrap(), expected,
            "{} in base {}", value, base,
        );
    }
}

#[test]
fn decimal() {
    check(R!(10), &[
        ((1, 1), "1"),
        ((2, 1), "2"),
        ((3, 1), "3"),
        ((10, 1), "10"),
        ((123, 1), "123"),
        ((1, 2), "0.5"),
        ((1, 3), "0.3..."),
        ((1, 4), "0.25"),
        ((1, 5), "0.2"),
        ((1, 10), "0.1"),
        ((1, 11), "0.[09]..."),
    ]);
}

#[test]
fn negadecimal() {
    check(R!(-10), &[
        ((-1, 1), "19"),
        ((-2, 1), "18"),
        ((-3, 1), "17"),
        ((-10, 1), "10"),
        ((-123, 1), "1937"),
        ((1, 2), "1.5"),
        ((3, 2), "2.5"),
        ((1, 3), "1.[74]..."),
        ((1, 4), "1.85"),
        ((3, 4), "1.35"),
        ((5, 4), "2.85"),
        ((1, 5), "1.8"),
        ((1, 10), "1.9"),
        ((1, 11), "1.[90]..."),
    ]);
}

#[test]
fn binary() {
    check(R!(2), &[
        ((1, 1), "1"),
        ((2, 1), "10"),
        ((3, 1), "11"),
        ((10, 1), "1010"),
        ((123, 1), "1111011"),
        ((1, 2), "0.1"),
        ((1, 3), "0.[01]..."),
        ((1, 4), "0.01"),
        ((1, 5), "0.[0011]..."),
        ((1, 10), "0.0[0011]..."),
        ((1, 11), "0.[0001011101]..."),
    ]);
}

#[test]
fn half() {
    check(R!(1, 2), &[
        ((1, 1), "1"),
        ((2, 1), "0.1"),
        ((3, 1), "1.1"),
        ((10, 1), "0.101"),
        ((123, 1), "1.101111"),
        ((1, 2), "10"),
        ((1, 3), "...[10]0"),
        ((1, 4), "100"),
        ((1, 5), "...[1100]0"),
        ((1, 10), "...[1100]00"),
        ((1, 11), "...[1011101000]0"),
    ]);
}

#[test]
fn negabinary() {
    check(R!(-2), &[
        ((1, 1), "1"),
        ((2, 1), "110"),
        ((3, 1), "111"),
        ((10, 1), "11110"),
        ((123, 1), "110001111"),
        ((1, 2), "1.1"),
        ((3, 2), "110.1"),
        ((1, 3), "1.[10]..."),
        ((1, 4), "0.01"),
        ((3, 4), "1.11"),
        ((5, 4), "1.01"),
        ((1, 5), "0.[0111]..."),
        ((1, 10), "0.0[1101]..."),
        ((1, 11), "0.[01101]..."),
    ]);
}

#[test]
fn negative_half() {
    check(R!(-1, 2), &[
        ((1, 1), "1"),
        ((2, 1), "0.11"),
        ((3, 1), "1.11"),
        ((10, 1), "0.1111"),
        ((123, 1), "1.11100011"),
        ((1, 2), "11"),
        ((3, 2), "10.11"),
        ((1, 3), "...[01]1"),
        ((1, 4), "100"),
        ((3, 4), "111"),
        ((5, 4), "101"),
        ((1, 5), "...[1110]0"),
        ((1, 10), "...[1011]00"),
        ((1, 11), "...[10110]0"),
    ]);
}

#[test]
fn hexadecimal() {
    check(R!(16), &[
        ((1, 1), "1"),
        ((2, 1), "2"),
        ((3, 1), "3"),
        ((10, 1), "a"),
        ((11, 1), "b"),
        ((12, 1), "c"),
        ((123, 1), "7b"),
        ((1, 2), "0.8"),
        ((15, 16), "0.f"),
        ((1, 3), "0.5..."),
        ((1, 4), "0.4"),
        ((1, 5), "0.3..."),
        ((1, 10), "0.19..."),
        ((1, 11), "0.[1745d]..."),
    ]);
}

#[test]
fn three_halves() {
    check(R!(3, 2), &[
        ((1, 1), "1"),
        ((2, 1), "2"),
        ((3, 2), "10"),
        ((5, 2), "11"),
        ((3, 1), "20"),
        ((4, 1), "21"),
        ((5, 1), "22"),
        ((6, 1), "210"),
        ((7, 1), "211"),
        ((8, 1), "212"),
        ((9, 1), "2100"),
        ((10, 1), "2101"),
        ((123, 1), "2101100010"),
        ((2, 3), "0.1"),
    ]);
}

#[test]
fn negative_three_halves() {
    check(R!(-3, 2), &[
        ((1, 1), "1"),
        ((2, 1), "2"),
        ((3, 1), "210"),
        ((4, 1), "211"),
        ((5, 1), "212"),
        ((6, 1), "21120"),
        ((7, 1), "21121"),
        ((8, 1), "21122"),
        ((9, 1), "21100"),
        ((10, 1), "21101"),
        ((123, 1), "2112010200220"),
        ((2, 3), "2.2"),
    ]);
}

#[test]
fn float_bases() {
    for (float, exact) in [(0.5, R!(1, 2)), (-0.5, R!(-1, 2)), (1.5, R!(3, 2)), (-1.5, R!(-3, 2))] {
        let from_float = FormatOptions::with_base(Rational::from(float));
        let from_fraction = FormatOptions::with_base(exact);
        for value in [R!(1, 3), R!(123), R!(2, 3)] {
            assert_eq!(value.to_positional(&from_float), value.to_positional(&from_fraction));
        }
    }
}

#[test]
fn fraction_digits() {
    let options = |fraction| FormatOptions { fraction, ..FormatOptions::default() };

    let padded = options(DigitOptions { min_digits: Some(5), ..DigitOptions::default() });
    assert_eq!(R!(1, 3).to_positional(&padded).unwrap(), "0.33333...");

    let limited = options(DigitOptions { max_digits: Some(5), ..DigitOptions::default() });
    assert_eq!(R!(1, 3).to_positional(&limited).unwrap(), "0.33333");
}

#[test]
fn scenarios() {
    assert_eq!(R!(1, 3).to_positional(&FormatOptions::default()).unwrap(), "0.3...");
    assert_eq!(R!(-2, 1).to_positional(&FormatOptions::with_base(R!(-10))).unwrap(), "18");
    assert_eq!(R!(1, 11).to_positional(&FormatOptions::with_base(R!(2))).unwrap(), "0.[0001011101]...");
    assert_eq!(R!(-1, 2).round(RoundMode::HALF_EVEN, &R!(1)), R!(0));
    assert_eq!(word(&R!(123)), "one hundred and twenty three");
    assert_eq!(roman_numeral(&R!(4)), "IV");
}

#[test]
fn one_value_many_ways() {
    let value = R!(12347, 8);

    assert_eq!(value.to_positional(&FormatOptions::default()).unwrap(), "1543.375");
    assert_eq!(value.to_fraction_text(","), "12,347/8");
    assert_eq!(value.round(RoundMode::HALF_EVEN, &HALF), R!(3087, 2));
    assert_eq!(scientific_notation(&value).to_string(), "1.543 × 10^3");
    assert_eq!(roman_numeral(&value), "MDXLIII∷");
    assert_eq!(word(&value), "one thousand five hundred and forty three and three eighths");
}
