//! Threshold range strings.
//!
//! Accepted forms are `"N - M"` and `"N% - M%"`. A `%` anywhere in the
//! string scales both endpoints by 1/100.

use fundrisk_model::{RangeParseError, RangeParseReason, ThresholdRange};

const SEPARATOR: &str = " - ";

/// Parses a `"min - max"` threshold string.
pub fn parse_range(input: &str) -> Result<ThresholdRange, RangeParseError> {
    let percent = input.contains('%');
    let cleaned = input.replace('%', "");
    let parts: Vec<&str> = cleaned.split(SEPARATOR).collect();
    let [min, max] = parts.as_slice() else {
        return Err(RangeParseError::new(input, RangeParseReason::Shape));
    };
    let min = parse_endpoint(input, min)?;
    let max = parse_endpoint(input, max)?;
    let scale = if percent { 100.0 } else { 1.0 };
    Ok(ThresholdRange::new(min / scale, max / scale))
}

fn parse_endpoint(input: &str, part: &str) -> Result<f64, RangeParseError> {
    let trimmed = part.trim();
    trimmed.parse::<f64>().map_err(|_| {
        RangeParseError::new(input, RangeParseReason::Endpoint(trimmed.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_range() {
        assert_eq!(parse_range("80% - 100%"), Ok(ThresholdRange::new(0.80, 1.00)));
        assert_eq!(parse_range("0% - 20%"), Ok(ThresholdRange::new(0.0, 0.2)));
    }

    #[test]
    fn test_plain_range() {
        assert_eq!(parse_range("0 - 3"), Ok(ThresholdRange::new(0.0, 3.0)));
        assert_eq!(parse_range(" 1.5 - 2.5 "), Ok(ThresholdRange::new(1.5, 2.5)));
    }

    #[test]
    fn test_percent_anywhere_scales_both() {
        assert_eq!(parse_range("50 - 100%"), Ok(ThresholdRange::new(0.5, 1.0)));
    }

    #[test]
    fn test_negative_endpoint() {
        assert_eq!(parse_range("-5 - 5"), Ok(ThresholdRange::new(-5.0, 5.0)));
    }

    #[test]
    fn test_shape_errors() {
        for input in ["foo", "", "0-3", "0 - 1 - 2"] {
            let err = parse_range(input).unwrap_err();
            assert_eq!(err.reason, RangeParseReason::Shape, "{input}");
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn test_endpoint_error() {
        let err = parse_range("a - 3").unwrap_err();
        assert_eq!(err.reason, RangeParseReason::Endpoint("a".to_string()));
        let err = parse_range("1 - ").unwrap_err();
        assert_eq!(err.reason, RangeParseReason::Endpoint(String::new()));
    }

    #[test]
    fn test_missing_separator_space_is_shape_error() {
        let err = parse_range("1 -").unwrap_err();
        assert_eq!(err.reason, RangeParseReason::Shape);
    }
}
