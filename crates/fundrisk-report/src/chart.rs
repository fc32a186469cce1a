//! Chart data for the metrics-versus-bands plot.
//!
//! The chart itself is drawn by an external renderer. This module only
//! produces the series: one line per metric across funds, plus the shaded
//! tolerance band for that metric.

use serde::{Deserialize, Serialize};

use fundrisk_core::EvaluationReport;
use fundrisk_model::{Metric, SummaryTable, ThresholdRange, Thresholds, Verdict};

pub const CHART_TITLE: &str = "Exposure and threshold summary";
pub const X_AXIS_LABEL: &str = "Fund";
pub const Y_AXIS_LABEL: &str = "Position";

/// Line color for a metric; the band uses the same color with low opacity.
pub fn metric_color(metric: Metric) -> &'static str {
    match metric {
        Metric::FixedIncome => "#FF6F61",
        Metric::Equity => "#6B5B95",
        Metric::Duration => "#88B04B",
    }
}

fn metric_marker(metric: Metric) -> &'static str {
    match metric {
        Metric::FixedIncome => "circle",
        Metric::Equity => "square",
        Metric::Duration => "diamond",
    }
}

/// One fund's value on a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub fund: String,
    pub value: f64,
    /// Value rounded to two decimals for the point annotation.
    pub label: String,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandSeries {
    pub metric: Metric,
    pub label: String,
    pub color: String,
    pub marker: String,
    pub band: ThresholdRange,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Fund names in x-axis order.
    pub funds: Vec<String>,
    pub series: Vec<BandSeries>,
}

impl BandChart {
    pub fn new(summary: &SummaryTable, thresholds: &Thresholds) -> Self {
        let series = Metric::ALL
            .iter()
            .map(|&metric| {
                let band = thresholds.range(metric);
                let points = summary
                    .rows
                    .iter()
                    .map(|row| {
                        let value = row.metric(metric);
                        ChartPoint {
                            fund: row.fund.clone(),
                            value,
                            label: format!("{value:.2}"),
                            verdict: band.classify(value),
                        }
                    })
                    .collect();
                BandSeries {
                    metric,
                    label: metric.label().to_string(),
                    color: metric_color(metric).to_string(),
                    marker: metric_marker(metric).to_string(),
                    band,
                    points,
                }
            })
            .collect();
        Self {
            title: CHART_TITLE.to_string(),
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
            funds: summary.funds().map(str::to_string).collect(),
            series,
        }
    }

    pub fn from_report(report: &EvaluationReport) -> Self {
        Self::new(&report.summary, &report.thresholds)
    }

    pub fn series(&self, metric: Metric) -> Option<&BandSeries> {
        self.series.iter().find(|series| series.metric == metric)
    }
}

#[cfg(test)]
mod tests {
    use fundrisk_core::default_thresholds;
    use fundrisk_model::{AssetBasis, FundSummaryRow};

    use super::*;

    #[test]
    fn series_follow_fund_order() {
        let summary = SummaryTable {
            reference_sheet: "Activos".to_string(),
            rows: vec![
                FundSummaryRow {
                    fund: "B".to_string(),
                    fixed_income: 0.856,
                    equity: 0.25,
                    duration: 1.0,
                    asset_basis: AssetBasis::Reported(10.0),
                },
                FundSummaryRow {
                    fund: "A".to_string(),
                    fixed_income: 0.9,
                    equity: 0.1,
                    duration: 2.5,
                    asset_basis: AssetBasis::Reported(10.0),
                },
            ],
        };
        let chart = BandChart::new(&summary, &default_thresholds());
        assert_eq!(chart.funds, vec!["B", "A"]);
        assert_eq!(chart.series.len(), 3);

        let fixed_income = chart.series(Metric::FixedIncome).unwrap();
        assert_eq!(fixed_income.band, ThresholdRange::new(0.8, 1.0));
        assert_eq!(fixed_income.points[0].label, "0.86");

        let equity = chart.series(Metric::Equity).unwrap();
        assert_eq!(equity.points[0].verdict, Verdict::Alert);
        assert_eq!(equity.points[1].verdict, Verdict::Compliant);
    }
}
