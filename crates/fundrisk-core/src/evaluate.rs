//! Threshold evaluation.

use fundrisk_model::{
    ComplianceRow, FundSummaryRow, Metric, RangeParseError, SummaryTable, ThresholdRange,
    Thresholds,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};

use crate::options::ThresholdInputs;
use crate::range::parse_range;

/// Parses all three range strings. The first failure wins and names its metric.
pub fn parse_thresholds(inputs: &ThresholdInputs) -> Result<Thresholds, RangeParseError> {
    let parse = |metric: Metric, input: &str| -> Result<ThresholdRange, RangeParseError> {
        let range = parse_range(input).map_err(|err| err.for_metric(metric))?;
        if range.min > range.max {
            warn!(%metric, input, "range minimum exceeds maximum, every value will alert");
        }
        Ok(range)
    };
    Ok(Thresholds {
        fixed_income: parse(Metric::FixedIncome, &inputs.fixed_income)?,
        equity: parse(Metric::Equity, &inputs.equity)?,
        duration: parse(Metric::Duration, &inputs.duration)?,
    })
}

/// Classifies every summary row against already parsed ranges.
pub fn classify(rows: &[FundSummaryRow], thresholds: &Thresholds) -> Vec<ComplianceRow> {
    rows.iter()
        .map(|row| ComplianceRow {
            fund: row.fund.clone(),
            fixed_income: thresholds.fixed_income.classify(row.fixed_income),
            equity: thresholds.equity.classify(row.equity),
            duration: thresholds.duration.classify(row.duration),
        })
        .collect()
}

/// Parses the three ranges and classifies every summary row.
///
/// Nothing is classified unless all three strings parse.
pub fn evaluate(
    rows: &[FundSummaryRow],
    fixed_income: &str,
    equity: &str,
    duration: &str,
) -> Result<Vec<ComplianceRow>, RangeParseError> {
    let thresholds = parse_thresholds(&ThresholdInputs::new(fixed_income, equity, duration))?;
    Ok(classify(rows, &thresholds))
}

/// A summary together with the ranges it was judged against and the verdicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub thresholds: Thresholds,
    pub summary: SummaryTable,
    pub compliance: Vec<ComplianceRow>,
}

impl EvaluationReport {
    /// Number of individual metric alerts across all funds.
    pub fn alert_count(&self) -> usize {
        self.compliance.iter().map(ComplianceRow::alert_count).sum()
    }

    pub fn has_alerts(&self) -> bool {
        self.compliance.iter().any(ComplianceRow::has_alert)
    }

    /// Funds with at least one alert, in summary order.
    pub fn funds_with_alerts(&self) -> impl Iterator<Item = &str> {
        self.compliance
            .iter()
            .filter(|row| row.has_alert())
            .map(|row| row.fund.as_str())
    }
}

/// Evaluates a summary table and bundles the result.
pub fn evaluate_summary(
    summary: &SummaryTable,
    inputs: &ThresholdInputs,
) -> Result<EvaluationReport, RangeParseError> {
    let span = info_span!("evaluate", funds = summary.len());
    let _guard = span.enter();

    let thresholds = parse_thresholds(inputs)?;
    debug!(
        fixed_income = %thresholds.fixed_income,
        equity = %thresholds.equity,
        duration = %thresholds.duration,
        "thresholds parsed"
    );
    let compliance = classify(&summary.rows, &thresholds);
    let report = EvaluationReport {
        thresholds,
        summary: summary.clone(),
        compliance,
    };
    info!(
        funds = report.compliance.len(),
        alerts = report.alert_count(),
        "evaluation complete"
    );
    Ok(report)
}

/// Evaluates against the default ranges.
pub fn evaluate_with_defaults(summary: &SummaryTable) -> EvaluationReport {
    let thresholds = default_thresholds();
    EvaluationReport {
        thresholds,
        summary: summary.clone(),
        compliance: classify(&summary.rows, &thresholds),
    }
}

/// The default ranges, already parsed.
pub fn default_thresholds() -> Thresholds {
    Thresholds {
        fixed_income: ThresholdRange::new(0.80, 1.00),
        equity: ThresholdRange::new(0.0, 0.20),
        duration: ThresholdRange::new(0.0, 3.0),
    }
}
