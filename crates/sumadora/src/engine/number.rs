//! Operand parsing and display formatting

use super::{EngineError, EngineResult};

/// Parses the operand accumulator as a number
///
/// Partial entries such as `"5."` and `".5"` parse the way the display
/// reads them; an empty accumulator does not parse.
pub(crate) fn parse_operand(text: &str) -> EngineResult<f64> {
    text.parse::<f64>()
        .map_err(|_| EngineError::Unparsable(text.to_string()))
}

/// Formats a value for the display
///
/// Integral values render without a fractional part (`8`, not `8.0`);
/// fractional values render with trailing zeros trimmed. Negative zero
/// renders as `"0"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let s = format!("{value:.10}");
        let s = s.trim_end_matches('0');
        let s = s.trim_end_matches('.');
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== parse_operand tests =====

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_operand("42"), Ok(42.0));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_operand("3.5"), Ok(3.5));
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(parse_operand("-5"), Ok(-5.0));
    }

    #[test]
    fn test_parse_trailing_point() {
        assert_eq!(parse_operand("5."), Ok(5.0));
    }

    #[test]
    fn test_parse_leading_point() {
        assert_eq!(parse_operand(".5"), Ok(0.5));
    }

    #[test]
    fn test_parse_empty_fails() {
        assert_eq!(
            parse_operand(""),
            Err(EngineError::Unparsable(String::new()))
        );
    }

    #[test]
    fn test_parse_bare_point_fails() {
        assert!(parse_operand(".").is_err());
    }

    #[test]
    fn test_parse_error_marker_fails() {
        assert!(parse_operand("Error").is_err());
    }

    // ===== format_number tests =====

    #[test]
    fn test_format_integer() {
        assert_eq!(format_number(42.0), "42");
    }

    #[test]
    fn test_format_negative_integer() {
        assert_eq!(format_number(-5.0), "-5");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_number(3.5), "3.5");
    }

    #[test]
    fn test_format_trailing_zeros_trimmed() {
        assert_eq!(format_number(2.500), "2.5");
    }

    #[test]
    fn test_format_small_decimal() {
        assert_eq!(format_number(0.125), "0.125");
    }

    #[test]
    fn test_format_percent_of_five() {
        assert_eq!(format_number(0.05), "0.05");
    }

    #[test]
    fn test_format_repeating_fraction_truncates() {
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
    }

    #[test]
    fn test_format_large_integral() {
        assert_eq!(format_number(1e14), "100000000000000");
    }

    #[test]
    fn test_format_very_large_integral() {
        // Beyond the {:.0} guard; still digits, no scientific notation
        assert_eq!(format_number(1e16), "10000000000000000");
    }

    #[test]
    fn test_format_parse_roundtrip() {
        for value in [1.0, -7.0, 0.5, 12.25, 100.0, -0.125] {
            assert_eq!(parse_operand(&format_number(value)), Ok(value));
        }
    }
}
