//! # English number words
//!
//! Spelling out values, like `one hundred and twenty three` or `two and three quarters`.
//!
//! Large numbers use the names `thousand` through `vigintillion`, in steps of a factor thousand.
use std::sync::LazyLock;

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::data::number_types::rational::{ONE, Rational};

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Name of `1000^(i + 1)` at index `i`.
const SCALES: [&str; 21] = [
    "thousand", "million", "billion", "trillion", "quadrillion", "quintillion", "sextillion",
    "septillion", "octillion", "nonillion", "decillion", "undecillion", "duodecillion",
    "tredecillion", "quattuordecillion", "quindecillion", "sexdecillion", "septendecillion",
    "octodecillion", "novemdecillion", "vigintillion",
];

/// Corrections to the naive ordinal, applied in order.
const ORDINAL_FIXES: [(&str, &str); 11] = [
    ("halfth", "half"),
    ("quarterth", "quarter"),
    ("oneth", "first"),
    ("twoth", "second"),
    ("threeth", "third"),
    ("fiveth", "fifth"),
    ("eightth", "eighth"),
    ("nineth", "ninth"),
    ("twelveth", "twelfth"),
    ("twentyth", "twentieth"),
    ("tyth", "tieth"),
];

static THOUSAND: LazyLock<BigInt> = LazyLock::new(|| BigInt::from(1000));
/// Values from here on have no name.
static TOO_LARGE: LazyLock<Rational> = LazyLock::new(|| {
    Rational::from(THOUSAND.pow(SCALES.len() as u32 + 1))
});

/// Spell out a value in English words.
pub fn word(value: &Rational) -> String {
    words(value, true).join(" ")
}

fn words(value: &Rational, include_zero: bool) -> Vec<String> {
    if value.is_undefined() {
        return vec!["undefined".to_string()];
    }
    if value.is_negative() {
        let mut words_for_negative = vec!["negative".to_string()];
        words_for_negative.extend(words(&-value, false));
        return words_for_negative;
    }
    if value.is_infinite() {
        return vec!["infinity".to_string()];
    }
    if value >= &*TOO_LARGE {
        return vec!["too large to show".to_string()];
    }

    if value.is_fractional() {
        fraction_words(value)
    } else {
        integer_words(value.numerator(), include_zero)
    }
}

/// Words for a positive value that isn't an integer: the integer part, then the fraction.
fn fraction_words(value: &Rational) -> Vec<String> {
    let fraction = value % &*ONE;
    let numerator = fraction.numerator();
    let denominator = fraction.denominator();

    let mut words = integer_words(value.integer_part().numerator(), false);
    if !words.is_empty() {
        words.push("and".to_string());
    }
    // The numerator is smaller, so only the denominator can be out of range
    if Rational::from(denominator.clone()) >= *TOO_LARGE {
        words.push("too large to show".to_string());
        return words;
    }

    let mut numerator_words = integer_words(numerator, true);
    if !words.is_empty() && numerator_words[0] == "one" {
        numerator_words[0] = "a".to_string();
    }

    let mut denominator_words = match denominator.to_u8() {
        Some(2) => vec!["half".to_string()],
        Some(4) => vec!["quarter".to_string()],
        _ => integer_words(denominator, true),
    };
    if denominator_words[0] == "one" {
        denominator_words.remove(0);
    }
    if let Some(last) = denominator_words.pop() {
        let plural = numerator > &BigInt::from(1);
        denominator_words.push(ordinal(&last, plural));
    }

    words.extend(numerator_words);
    words.extend(denominator_words);
    words
}

fn ordinal(cardinal: &str, plural: bool) -> String {
    let suffix = if plural { "ths" } else { "th" };

    ORDINAL_FIXES.iter().fold(format!("{}{}", cardinal, suffix), |ordinal, (from, to)| {
        ordinal.replacen(from, to, 1)
    })
}

/// Words for a non negative integer.
fn integer_words(value: &BigInt, include_zero: bool) -> Vec<String> {
    if value.is_zero() {
        return if include_zero { vec![ONES[0].to_string()] } else { Vec::new() };
    }

    match value.to_u64() {
        Some(small) if small < 1000 => below_thousand(small),
        _ => {
            let mut words = Vec::new();
            for (index, scale) in SCALES.iter().enumerate().rev() {
                let group = (value / THOUSAND.pow(index as u32 + 1)) % &*THOUSAND;
                let group_words = integer_words(&group, false);
                if !group_words.is_empty() {
                    words.extend(group_words);
                    words.push(scale.to_string());
                }
            }

            let hundreds = integer_words(&(value % &*THOUSAND), false);
            if !hundreds.is_empty() {
                if !hundreds.iter().any(|word| word == "and") {
                    words.push("and".to_string());
                }
                words.extend(hundreds);
            }

            words
        }
    }
}

/// Words for an integer in `[1, 1000)`.
fn below_thousand(value: u64) -> Vec<String> {
    match value {
        0..20 => vec![ONES[value as usize].to_string()],
        20..100 => {
            let mut words = vec![TENS[(value / 10) as usize].to_string()];
            if value % 10 > 0 {
                words.push(ONES[(value % 10) as usize].to_string());
            }
            words
        }
        _ => {
            let mut words = below_thousand(value / 100);
            words.push("hundred".to_string());
            if value % 100 > 0 {
                words.push("and".to_string());
                words.extend(below_thousand(value % 100));
            }
            words
        }
    }
}
