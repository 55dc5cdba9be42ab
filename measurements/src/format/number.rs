use rust_decimal::{Decimal, RoundingStrategy};

use crate::format::Locale;

/// 2⁵³, beyond which every `f64` is an integer and its exact binary digits are noise.
const SHORTEST_DIGITS_FROM: f64 = 9_007_199_254_740_992.0;

/// Round half to even to at most `maximum_fraction_digits`, and drop the trailing zeros.
///
/// The rounding works on the exact binary value, so `2.675` (stored as `2.67499…`) rounds down.
/// Integral values from 2⁵³ on are rendered with their shortest round-trip digits instead.
#[must_use]
pub fn format_number(
    value: f64,
    maximum_fraction_digits: u32,
    locale: Locale,
    use_grouping: bool,
) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "∞" } else { "-∞" }.to_owned();
    }
    let rounded = if value.abs() >= SHORTEST_DIGITS_FROM {
        value.to_string()
    } else {
        Decimal::from_f64_retain(value).map_or_else(
            || value.to_string(),
            |decimal| {
                decimal
                    .round_dp_with_strategy(
                        maximum_fraction_digits,
                        RoundingStrategy::MidpointNearestEven,
                    )
                    .normalize()
                    .to_string()
            },
        )
    };

    let (sign, unsigned) =
        rounded.strip_prefix('-').map_or(("", rounded.as_str()), |unsigned| ("-", unsigned));
    let (integer, fraction) = unsigned
        .split_once('.')
        .map_or((unsigned, None), |(integer, fraction)| (integer, Some(fraction)));

    let mut formatted = String::with_capacity(rounded.len() + integer.len() / 3 + 1);
    formatted.push_str(sign);
    if use_grouping {
        push_grouped(&mut formatted, integer, locale.grouping_separator());
    } else {
        formatted.push_str(integer);
    }
    if let Some(fraction) = fraction {
        formatted.push(locale.decimal_separator());
        formatted.push_str(fraction);
    }
    formatted
}

fn push_grouped(formatted: &mut String, integer: &str, separator: char) {
    for (i, digit) in integer.chars().enumerate() {
        if i != 0 && (integer.len() - i) % 3 == 0 {
            formatted.push(separator);
        }
        formatted.push(digit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(value: f64, maximum_fraction_digits: u32) -> String {
        format_number(value, maximum_fraction_digits, Locale::EN_US, false)
    }

    #[test]
    fn rounds_half_to_even() {
        assert_eq!(format(0.125, 2), "0.12");
        assert_eq!(format(0.375, 2), "0.38");
        assert_eq!(format(2.5, 0), "2");
        assert_eq!(format(3.5, 0), "4");
        assert_eq!(format(-2.5, 0), "-2");
    }

    #[test]
    fn rounds_binary_value() {
        assert_eq!(format(2.675, 2), "2.67");
    }

    #[test]
    fn drops_trailing_zeros() {
        assert_eq!(format(2.0, 2), "2");
        assert_eq!(format(2.1, 4), "2.1");
        assert_eq!(format(-0.001, 2), "0");
        assert_eq!(format(0.0, 2), "0");
    }

    #[test]
    fn non_finite() {
        assert_eq!(format(f64::NAN, 2), "NaN");
        assert_eq!(format(f64::INFINITY, 2), "∞");
        assert_eq!(format(f64::NEG_INFINITY, 2), "-∞");
    }

    /// Large values look the same on both sides of the decimal range limit.
    #[test]
    fn large_values_use_shortest_digits() {
        assert_eq!(format(1e28, 2), "10000000000000000000000000000");
        assert_eq!(format(8e28, 2), "80000000000000000000000000000");
        assert_eq!(format(1e30, 2), "1000000000000000000000000000000");
        assert_eq!(format(-1e20, 2), "-100000000000000000000");
        assert_eq!(format_number(1e18, 2, Locale::EN_US, true), "1,000,000,000,000,000,000");
    }

    #[test]
    fn grouping() {
        assert_eq!(format_number(1_234_567.891, 2, Locale::EN_US, true), "1,234,567.89");
        assert_eq!(format_number(-1234.5, 2, Locale::DE_DE, true), "-1.234,5");
        assert_eq!(format_number(123.0, 2, Locale::EN_US, true), "123");
        assert_eq!(format_number(1000.0, 2, Locale::FR_FR, true), "1\u{202f}000");
    }
}
