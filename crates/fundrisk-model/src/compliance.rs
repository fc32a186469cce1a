use std::fmt;

use serde::{Deserialize, Serialize};

/// The three evaluated exposure metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    FixedIncome,
    Equity,
    Duration,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::FixedIncome, Metric::Equity, Metric::Duration];

    pub fn label(self) -> &'static str {
        match self {
            Metric::FixedIncome => "Fixed income",
            Metric::Equity => "Equity",
            Metric::Duration => "Weighted duration",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive tolerance band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRange {
    pub min: f64,
    pub max: f64,
}

impl ThresholdRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `min <= value <= max`, no tolerance. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn classify(&self, value: f64) -> Verdict {
        if self.contains(value) {
            Verdict::Compliant
        } else {
            Verdict::Alert
        }
    }
}

impl fmt::Display for ThresholdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

/// The ranges for all three metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub fixed_income: ThresholdRange,
    pub equity: ThresholdRange,
    pub duration: ThresholdRange,
}

impl Thresholds {
    pub fn range(&self, metric: Metric) -> ThresholdRange {
        match metric {
            Metric::FixedIncome => self.fixed_income,
            Metric::Equity => self.equity,
            Metric::Duration => self.duration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Compliant,
    Alert,
}

impl Verdict {
    pub fn is_alert(self) -> bool {
        self == Verdict::Alert
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Compliant => "Compliant",
            Verdict::Alert => "Alert",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdicts for one fund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceRow {
    pub fund: String,
    pub fixed_income: Verdict,
    pub equity: Verdict,
    pub duration: Verdict,
}

impl ComplianceRow {
    pub fn verdict(&self, metric: Metric) -> Verdict {
        match metric {
            Metric::FixedIncome => self.fixed_income,
            Metric::Equity => self.equity,
            Metric::Duration => self.duration,
        }
    }

    pub fn alert_count(&self) -> usize {
        Metric::ALL
            .iter()
            .filter(|metric| self.verdict(**metric).is_alert())
            .count()
    }

    pub fn has_alert(&self) -> bool {
        self.alert_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let range = ThresholdRange::new(0.0, 3.0);
        assert_eq!(range.classify(0.0), Verdict::Compliant);
        assert_eq!(range.classify(3.0), Verdict::Compliant);
        assert_eq!(range.classify(4.0), Verdict::Alert);
        assert_eq!(range.classify(-1.0), Verdict::Alert);
    }

    #[test]
    fn nan_is_an_alert() {
        assert_eq!(ThresholdRange::new(0.0, 1.0).classify(f64::NAN), Verdict::Alert);
    }
}
