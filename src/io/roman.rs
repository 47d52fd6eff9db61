//! # Roman numerals
//!
//! Additive-subtractive numerals, extended below one with the duodecimal fraction symbols for
//! twelfths.
use std::sync::LazyLock;

use crate::data::number_types::rational::Rational;

/// Values above this are shown as this.
const LIMIT: i32 = 100_000;

/// Symbols with their value as a fraction, largest first.
const SYMBOLS: [(i32, i32, &str); 19] = [
    (1000, 1, "M"),
    (900, 1, "CM"),
    (500, 1, "D"),
    (400, 1, "CD"),
    (100, 1, "C"),
    (90, 1, "XC"),
    (50, 1, "L"),
    (40, 1, "XL"),
    (10, 1, "X"),
    (9, 1, "IX"),
    (5, 1, "V"),
    (4, 1, "IV"),
    (1, 1, "I"),
    (6, 12, "s"),
    (5, 12, "⁙"),
    (4, 12, "∷"),
    (3, 12, "∴"),
    (2, 12, ":"),
    (1, 12, "·"),
];

static TABLE: LazyLock<Vec<(Rational, &'static str)>> = LazyLock::new(|| {
    SYMBOLS.iter()
        .map(|&(numerator, denominator, symbol)| (Rational::new(numerator, denominator), symbol))
        .collect()
});

/// Write a value as a Roman numeral.
///
/// The sign is dropped, values above a hundred thousand are capped and whatever is left below a
/// twelfth is not shown. The undefined value gives an empty string.
pub fn roman_numeral(value: &Rational) -> String {
    if value.is_undefined() {
        return String::new();
    }

    let limit = Rational::from(LIMIT);
    let mut remaining = value.absolute();
    if remaining > limit {
        remaining = limit;
    }

    let mut numeral = String::new();
    while let Some((amount, symbol)) = TABLE.iter().find(|(amount, _)| &remaining >= amount) {
        numeral.push_str(symbol);
        remaining -= amount;
    }

    numeral
}
