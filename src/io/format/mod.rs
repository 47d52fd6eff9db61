//! # Positional formatting
//!
//! Rendering values as text, digit by digit, in any base that admits a positional system.
//!
//! Digits are written with the characters `0-9a-z` as long as the base needs no more than 36 of
//! them. Beyond that, every digit is written in decimal and digits are separated by `:` by default.
//! Repeating cycles are shown between brackets next to an ellipsis on the side where they continue
//! forever, like `0.[09]...` or `...[10]0`.
use itertools::Itertools;
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

use crate::algorithm::positional::PositionalExpansion;
use crate::data::number_types::rational::{Rational, TEN};
use crate::io::error::ExpansionError;


/// Largest alphabet that can be written with digits and lowercase letters.
const LETTER_RADIX_LIMIT: u32 = 36;
/// Digit separator for larger alphabets.
const WIDE_DIGIT_SEPARATOR: &str = ":";
/// Number of digits between two group separators, when not configured.
pub const DEFAULT_GROUP_SIZE: usize = 3;

/// How to render a value.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FormatOptions {
    /// Base of the positional system, see `Rational::positional` for which values are allowed.
    pub base: Rational,
    /// Text between the integer and the fraction digits.
    pub point: String,
    /// Text between two digits, on both sides of the point.
    ///
    /// Defaults to nothing, or `:` for bases that need more than 36 digits.
    pub digit_separator: Option<String>,
    /// Options for the digits in front of the point.
    pub integer: DigitOptions,
    /// Options for the digits after the point.
    pub fraction: DigitOptions,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            base: TEN.clone(),
            point: ".".to_string(),
            digit_separator: None,
            integer: DigitOptions::default(),
            fraction: DigitOptions::default(),
        }
    }
}

impl FormatOptions {
    /// Default options, in another base.
    pub fn with_base(base: Rational) -> Self {
        Self { base, ..Self::default() }
    }
}

/// How to render the digits on one side of the point.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct DigitOptions {
    /// Pad with zeros (or with the repeating cycle) up to this many digits.
    ///
    /// Defaults to one in front of the point, and zero after it.
    pub min_digits: Option<usize>,
    /// Show at most this many digits.
    ///
    /// Integer digits are kept from the most significant end, fraction digits from the point. A
    /// repeating cycle is written out up to this length instead of being shown with an ellipsis.
    pub max_digits: Option<usize>,
    /// Overrides `FormatOptions::digit_separator` for this side.
    pub digit_separator: Option<String>,
    /// Text between groups of digits, counted from the point outwards.
    pub group_separator: Option<String>,
    /// Digits per group, `DEFAULT_GROUP_SIZE` when not given.
    pub group_size: Option<usize>,
}

/// Which side of the point digits are on.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Side {
    Integer,
    Fraction,
}

impl Rational {
    /// Render this value in a positional system.
    ///
    /// The undefined value renders as `NAN`, the infinities as `∞` and `-∞`.
    ///
    /// # Errors
    ///
    /// When the base in the options doesn't admit a positional system.
    pub fn to_positional(&self, options: &FormatOptions) -> Result<String, ExpansionError> {
        if let Some(symbol) = self.symbol() {
            return Ok(symbol.to_string());
        }

        let expansion = self.positional(&options.base)?;
        let alphabet = alphabet(&options.base);
        let separator = options.digit_separator.as_deref()
            .unwrap_or(if alphabet.is_some() { "" } else { WIDE_DIGIT_SEPARATOR });

        let integer = integer_text(&expansion, &options.integer, separator, alphabet);
        let fraction = fraction_text(&expansion, &options.fraction, separator, alphabet);

        let mut text = String::new();
        if expansion.sign == Sign::Minus {
            text.push('-');
        }
        text.push_str(&integer);
        if !fraction.is_empty() {
            text.push_str(&options.point);
            text.push_str(&fraction);
        }

        Ok(text)
    }

    /// Render this value as a decimal fraction `numerator/denominator`, or as a decimal integer.
    ///
    /// Both parts are grouped per three digits with `group_separator`.
    pub fn to_fraction_text(&self, group_separator: &str) -> String {
        if let Some(symbol) = self.symbol() {
            return symbol.to_string();
        }

        let options = DigitOptions {
            group_separator: Some(group_separator.to_string()),
            ..DigitOptions::default()
        };
        let grouped = |value: &BigInt| {
            let digits = value.magnitude().to_str_radix(10)
                .chars()
                .map(String::from)
                .collect::<Vec<_>>();
            let sign = if value.sign() == Sign::Minus { "-" } else { "" };

            format!("{}{}", sign, join(&digits, "", &options, Side::Integer))
        };

        if self.is_integer() {
            grouped(self.numerator())
        } else {
            format!("{}/{}", grouped(self.numerator()), grouped(self.denominator()))
        }
    }

    /// Text for the values that have no digits.
    fn symbol(&self) -> Option<&'static str> {
        if self.is_undefined() {
            Some("NAN")
        } else if self.is_infinite() {
            Some(if self.is_negative() { "-∞" } else { "∞" })
        } else {
            None
        }
    }
}

/// Radix of the digit alphabet, `None` when it has more digits than can be written with letters.
///
/// The alphabet needs as many digits as the larger of the magnitudes of the base's numerator and
/// denominator.
fn alphabet(base: &Rational) -> Option<u32> {
    base.numerator().magnitude().max(base.denominator().magnitude())
        .to_u32()
        .filter(|&size| size <= LETTER_RADIX_LIMIT)
}

fn render(digit: &BigInt, alphabet: Option<u32>) -> String {
    match alphabet {
        Some(radix) => digit.to_str_radix(radix),
        None => digit.to_string(),
    }
}

fn integer_text(
    expansion: &PositionalExpansion,
    options: &DigitOptions,
    separator: &str,
    alphabet: Option<u32>,
) -> String {
    let separator = options.digit_separator.as_deref().unwrap_or(separator);
    let repeat = expansion.integer_repeat;

    // Most significant first
    let mut digits = expansion.integer_digits.iter().rev()
        .map(|digit| render(digit, alphabet))
        .collect::<Vec<_>>();

    let min_digits = options.min_digits.unwrap_or(1);
    let wanted = match (repeat, options.max_digits) {
        (Some(_), Some(max_digits)) => min_digits.max(max_digits),
        _ => min_digits,
    };
    while digits.len() < wanted {
        // Prepending the cycle's last digit rotates the cycle, it stays at the front
        let next = match repeat {
            Some(length) => digits[length - 1].clone(),
            None => "0".to_string(),
        };
        digits.insert(0, next);
    }

    match (repeat, options.max_digits) {
        (Some(1), None) => format!("...{}", digits.iter().join(separator)),
        (Some(length), None) => format!(
            "...[{}]{}",
            digits[..length].iter().join(separator),
            digits[length..].iter().join(separator),
        ),
        (_, max_digits) => {
            let shown = max_digits.unwrap_or(digits.len()).min(digits.len());
            join(&digits[..shown], separator, options, Side::Integer)
        }
    }
}

fn fraction_text(
    expansion: &PositionalExpansion,
    options: &DigitOptions,
    separator: &str,
    alphabet: Option<u32>,
) -> String {
    let separator = options.digit_separator.as_deref().unwrap_or(separator);
    let repeat = expansion.fraction_repeat;

    let mut digits = expansion.fraction_digits.iter()
        .map(|digit| render(digit, alphabet))
        .collect::<Vec<_>>();

    let min_digits = options.min_digits.unwrap_or(0);
    let wanted = match (repeat, options.max_digits) {
        (Some(_), Some(max_digits)) => min_digits.max(max_digits),
        _ => min_digits,
    };
    while digits.len() < wanted {
        // Appending the cycle's first digit rotates the cycle, it stays at the end
        let next = match repeat {
            Some(length) => digits[digits.len() - length].clone(),
            None => "0".to_string(),
        };
        digits.push(next);
    }

    match (repeat, options.max_digits) {
        (Some(1), None) => format!("{}...", digits.iter().join(separator)),
        (Some(length), None) => {
            let start = digits.len() - length;
            format!(
                "{}[{}]...",
                digits[..start].iter().join(separator),
                digits[start..].iter().join(separator),
            )
        }
        (_, max_digits) => {
            let shown = max_digits.unwrap_or(digits.len()).min(digits.len());
            join(&digits[..shown], separator, options, Side::Fraction)
        }
    }
}

/// Join digits, putting the group separator (if any) in place of the digit separator at every
/// group boundary.
///
/// Groups are counted from the point: from the right for integer digits, from the left for
/// fraction digits.
fn join(digits: &[String], separator: &str, options: &DigitOptions, side: Side) -> String {
    let Some(group_separator) = options.group_separator.as_deref() else {
        return digits.iter().join(separator);
    };
    let size = options.group_size.unwrap_or(DEFAULT_GROUP_SIZE).max(1);

    let mut text = String::new();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 {
            let boundary = match side {
                Side::Integer => (digits.len() - i) % size == 0,
                Side::Fraction => i % size == 0,
            };
            text.push_str(if boundary { group_separator } else { separator });
        }
        text.push_str(digit);
    }

    text
}
