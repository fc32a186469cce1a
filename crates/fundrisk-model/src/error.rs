use thiserror::Error;

use crate::compliance::Metric;

/// Why a threshold string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeParseReason {
    /// The string did not split into exactly two parts around `" - "`.
    Shape,
    /// One endpoint is not a number.
    Endpoint(String),
}

/// A malformed `"min - max"` threshold string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid range {input:?}{}: {}", metric_suffix(.metric), reason_text(.reason))]
pub struct RangeParseError {
    pub metric: Option<Metric>,
    pub input: String,
    pub reason: RangeParseReason,
}

impl RangeParseError {
    pub fn new(input: impl Into<String>, reason: RangeParseReason) -> Self {
        Self {
            metric: None,
            input: input.into(),
            reason,
        }
    }

    #[must_use]
    pub fn for_metric(mut self, metric: Metric) -> Self {
        self.metric = Some(metric);
        self
    }
}

fn metric_suffix(metric: &Option<Metric>) -> String {
    match metric {
        Some(metric) => format!(" for {}", metric.label().to_lowercase()),
        None => String::new(),
    }
}

fn reason_text(reason: &RangeParseReason) -> String {
    match reason {
        RangeParseReason::Shape => "expected 'X - Y' with numeric values".to_string(),
        RangeParseReason::Endpoint(part) => format!("'{part}' is not a number"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RangeParseError::new("foo", RangeParseReason::Shape).for_metric(Metric::Equity);
        assert_eq!(
            err.to_string(),
            "invalid range \"foo\" for equity: expected 'X - Y' with numeric values"
        );
    }

    #[test]
    fn test_endpoint_display() {
        let err = RangeParseError::new("a - 3", RangeParseReason::Endpoint("a".to_string()));
        assert_eq!(err.to_string(), "invalid range \"a - 3\": 'a' is not a number");
    }
}
