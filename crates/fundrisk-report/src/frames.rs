//! DataFrame views of the summary and compliance tables.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use fundrisk_model::{AssetBasis, ComplianceRow, Metric, SummaryTable};

use crate::error::Result;

pub const FUND_COLUMN: &str = "Fund";
pub const ASSET_BASIS_COLUMN: &str = "Asset basis";
pub const TOTAL_ASSETS_COLUMN: &str = "Total assets";
pub const ALERTS_COLUMN: &str = "Alerts";

/// Column label for a metric in exported tables.
pub fn metric_column(metric: Metric) -> &'static str {
    metric.label()
}

/// One row per fund: the three metrics plus where the divisor came from.
pub fn summary_frame(summary: &SummaryTable) -> Result<DataFrame> {
    let funds: Vec<&str> = summary.funds().collect();
    let mut columns: Vec<Column> = vec![Series::new(FUND_COLUMN.into(), funds).into()];
    for metric in Metric::ALL {
        let values: Vec<f64> = summary.rows.iter().map(|row| row.metric(metric)).collect();
        columns.push(Series::new(metric_column(metric).into(), values).into());
    }
    let basis: Vec<&str> = summary
        .rows
        .iter()
        .map(|row| basis_label(row.asset_basis))
        .collect();
    let assets: Vec<Option<f64>> = summary
        .rows
        .iter()
        .map(|row| match row.asset_basis {
            AssetBasis::Reported(value) => Some(value),
            AssetBasis::Fallback => None,
        })
        .collect();
    columns.push(Series::new(ASSET_BASIS_COLUMN.into(), basis).into());
    columns.push(Series::new(TOTAL_ASSETS_COLUMN.into(), assets).into());
    Ok(DataFrame::new(columns)?)
}

/// One row per fund with a verdict per metric and the alert count.
pub fn compliance_frame(rows: &[ComplianceRow]) -> Result<DataFrame> {
    let funds: Vec<&str> = rows.iter().map(|row| row.fund.as_str()).collect();
    let mut columns: Vec<Column> = vec![Series::new(FUND_COLUMN.into(), funds).into()];
    for metric in Metric::ALL {
        let verdicts: Vec<&str> = rows.iter().map(|row| row.verdict(metric).as_str()).collect();
        columns.push(Series::new(metric_column(metric).into(), verdicts).into());
    }
    let alerts: Vec<u32> = rows
        .iter()
        .map(|row| u32::try_from(row.alert_count()).unwrap_or(u32::MAX))
        .collect();
    columns.push(Series::new(ALERTS_COLUMN.into(), alerts).into());
    Ok(DataFrame::new(columns)?)
}

pub fn basis_label(basis: AssetBasis) -> &'static str {
    match basis {
        AssetBasis::Reported(_) => "reported",
        AssetBasis::Fallback => "fallback",
    }
}
