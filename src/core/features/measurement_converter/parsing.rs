//! Field text parsing and two-decimal display formatting

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::*;
use rust_decimal::RoundingStrategy;

/// Decimal places shown in a converted field
pub const DISPLAY_DECIMALS: u32 = 2;

/// Text shown when the source field does not hold a number
pub const NOT_A_NUMBER: &str = "NaN";

// Compiled once; the pattern is a constant so expect cannot fire
static RE_DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$")
        .expect("Failed to compile decimal pattern")
});

/// Result of reading a field's text
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedInput {
    /// Nothing entered
    Empty,
    Numeric(f64),
    /// Entered text that is not a number
    Invalid,
}

impl ParsedInput {
    /// `Empty` counts as valid: there is simply nothing to convert.
    pub fn is_valid(&self) -> bool {
        !matches!(self, ParsedInput::Invalid)
    }

    /// The number to convert, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            ParsedInput::Numeric(value) => Some(*value),
            _ => None,
        }
    }
}

/// Parse field text.
///
/// Only the exact empty string is `Empty`. Surrounding whitespace is
/// ignored and whitespace-only text reads as zero. Accepts signed decimals,
/// bare leading/trailing dots, exponents and `Infinity`.
pub fn parse_input(text: &str) -> ParsedInput {
    if text.is_empty() {
        return ParsedInput::Empty;
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ParsedInput::Numeric(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => ParsedInput::Numeric(f64::INFINITY),
        "-Infinity" => ParsedInput::Numeric(f64::NEG_INFINITY),
        _ if RE_DECIMAL.is_match(trimmed) => trimmed
            .parse::<f64>()
            .map(ParsedInput::Numeric)
            .unwrap_or(ParsedInput::Invalid),
        _ => ParsedInput::Invalid,
    }
}

/// Format a value with exactly [`DISPLAY_DECIMALS`] decimals.
///
/// Rounds half away from zero on the exact binary value, keeps the sign of
/// negatives that round to zero (`-0.00`) and spells out non-finite values.
/// Examples: 32.0 -> "32.00", 0.125 -> "0.13", -0.001 -> "-0.00"
pub fn format_fixed(value: f64) -> String {
    if value.is_nan() {
        return NOT_A_NUMBER.to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    let rounded = Decimal::from_f64_retain(magnitude).and_then(|decimal| {
        let mut rounded = decimal
            .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DISPLAY_DECIMALS);
        // Near Decimal's 96-bit limit rescale silently keeps a smaller scale
        (rounded.scale() == DISPLAY_DECIMALS).then_some(rounded)
    });

    match rounded {
        Some(rounded) => format!("{}{}", sign, rounded),
        // From ~1e27 up the float has no fractional digits left to round
        None => format!("{}{:.2}", sign, magnitude),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_input(""), ParsedInput::Empty);
    }

    #[test]
    fn test_parse_whitespace_only_is_zero() {
        assert_eq!(parse_input("   "), ParsedInput::Numeric(0.0));
    }

    #[test]
    fn test_parse_decimal_forms() {
        assert_eq!(parse_input("42"), ParsedInput::Numeric(42.0));
        assert_eq!(parse_input(" -3.5 "), ParsedInput::Numeric(-3.5));
        assert_eq!(parse_input("+7"), ParsedInput::Numeric(7.0));
        assert_eq!(parse_input(".5"), ParsedInput::Numeric(0.5));
        assert_eq!(parse_input("5."), ParsedInput::Numeric(5.0));
        assert_eq!(parse_input("1e3"), ParsedInput::Numeric(1000.0));
        assert_eq!(parse_input("2.5E-1"), ParsedInput::Numeric(0.25));
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_input("Infinity"), ParsedInput::Numeric(f64::INFINITY));
        assert_eq!(parse_input("-Infinity"), ParsedInput::Numeric(f64::NEG_INFINITY));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["abc", "12kg", "1,5", "--1", ".", "e5", "inf", "nan", "1.2.3"] {
            assert_eq!(parse_input(text), ParsedInput::Invalid, "{text:?}");
        }
    }

    #[test]
    fn test_validity_and_value() {
        assert!(ParsedInput::Empty.is_valid());
        assert!(ParsedInput::Numeric(1.0).is_valid());
        assert!(!ParsedInput::Invalid.is_valid());
        assert_eq!(ParsedInput::Numeric(2.0).value(), Some(2.0));
        assert_eq!(ParsedInput::Empty.value(), None);
    }

    #[test]
    fn test_format_pads_to_two_decimals() {
        assert_eq!(format_fixed(32.0), "32.00");
        assert_eq!(format_fixed(0.0), "0.00");
        assert_eq!(format_fixed(3.5), "3.50");
        assert_eq!(format_fixed(1234567.891), "1234567.89");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        assert_eq!(format_fixed(0.125), "0.13");
        assert_eq!(format_fixed(-0.125), "-0.13");
        assert_eq!(format_fixed(2.675), "2.67"); // stored just below 2.675
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_fixed(-0.0), "0.00");
        assert_eq!(format_fixed(-0.001), "-0.00");
    }

    #[test]
    fn test_format_keeps_two_decimals_near_decimal_limit() {
        assert_eq!(format_fixed(1e27), "1000000000000000013287555072.00");
        assert_eq!(format_fixed(5e27), format!("{:.2}", 5e27));
        assert_eq!(format_fixed(-7e28), "-69999999999999999280861413376.00");
        assert_eq!(format_fixed(8e28), format!("{:.2}", 8e28));
        for value in [1e26, 1e27, 5e27, 7e28, 7.9e28, 1e30] {
            let text = format_fixed(value);
            let (_, decimals) = text.split_once('.').expect("decimal point");
            assert_eq!(decimals.len(), 2, "{value:e} -> {text}");
        }
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_fixed(f64::NAN), "NaN");
        assert_eq!(format_fixed(f64::INFINITY), "Infinity");
        assert_eq!(format_fixed(f64::NEG_INFINITY), "-Infinity");
    }
}
