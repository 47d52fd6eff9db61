use std::env;
use std::process::exit;

use clap::{Parser, ValueEnum};
use num_bigint::BigInt;
use num_traits::One;
use tracing::{debug, error};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use numerals::data::number_types::rational::Rational;
use numerals::io::format::{DigitOptions, FormatOptions};
use numerals::io::roman::roman_numeral;
use numerals::io::scientific::scientific_notation;
use numerals::io::word::word;

/// Write exact fractions in any base, or in words.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// Numerator of the value
    #[arg(allow_hyphen_values = true)]
    numerator: BigInt,
    /// Denominator of the value, zero gives an infinity or the undefined value
    #[arg(allow_hyphen_values = true)]
    denominator: Option<BigInt>,
    /// How to write the value
    #[arg(long, value_enum, default_value_t = Style::Positional)]
    style: Style,
    /// Base of the positional system, may be negative or fractional like -0.5 or 1.5
    #[arg(long, default_value_t = 10., allow_hyphen_values = true)]
    base: f64,
    /// Pad the fraction digits to at least this many
    #[arg(long)]
    min_fraction_digits: Option<usize>,
    /// Show at most this many fraction digits
    #[arg(long)]
    max_fraction_digits: Option<usize>,
    /// Text between groups of digits
    #[arg(long)]
    group_separator: Option<String>,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum Style {
    Positional,
    Fraction,
    Scientific,
    Roman,
    Word,
}

/// Log filter from `RUST_LOG` style directives, showing warnings and errors when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

fn main() {
    let directives = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .init();

    let opts: Opts = Opts::parse();

    let denominator = opts.denominator.unwrap_or_else(BigInt::one);
    let value = Rational::new(opts.numerator, denominator);
    debug!(%value, style = ?opts.style, "writing value");

    let text = match opts.style {
        Style::Positional => {
            let groups = DigitOptions {
                group_separator: opts.group_separator.clone(),
                ..DigitOptions::default()
            };
            let options = FormatOptions {
                integer: groups.clone(),
                fraction: DigitOptions {
                    min_digits: opts.min_fraction_digits,
                    max_digits: opts.max_fraction_digits,
                    ..groups
                },
                ..FormatOptions::with_base(Rational::from(opts.base))
            };

            match value.to_positional(&options) {
                Ok(text) => text,
                Err(error) => {
                    error!(%error, "can't write value");
                    exit(1);
                }
            }
        }
        Style::Fraction => value.to_fraction_text(opts.group_separator.as_deref().unwrap_or("")),
        Style::Scientific => scientific_notation(&value).to_string(),
        Style::Roman => roman_numeral(&value),
        Style::Word => word(&value),
    };

    println!("{}", text);
}
