/// Shorthand for creating a rational number, mostly in tests.
///
/// With one argument, the value is converted exactly from an integer or a float. With two
/// arguments, they are taken as numerator and denominator.
#[macro_export]
macro_rules! R {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational::from($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational::new($numer, $denom)
    };
}
