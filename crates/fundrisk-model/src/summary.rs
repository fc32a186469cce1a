use serde::{Deserialize, Serialize};

use crate::compliance::Metric;

/// Where a fund's ratio divisor came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AssetBasis {
    /// Total assets found in the reference sheet.
    Reported(f64),
    /// No reference row matched; ratios are raw sums (divisor 1).
    Fallback,
}

impl AssetBasis {
    pub fn divisor(self) -> f64 {
        match self {
            AssetBasis::Reported(value) => value,
            AssetBasis::Fallback => 1.0,
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, AssetBasis::Fallback)
    }
}

/// Exposure figures for one fund sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundSummaryRow {
    pub fund: String,
    pub fixed_income: f64,
    pub equity: f64,
    pub duration: f64,
    pub asset_basis: AssetBasis,
}

impl FundSummaryRow {
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::FixedIncome => self.fixed_income,
            Metric::Equity => self.equity,
            Metric::Duration => self.duration,
        }
    }
}

/// Summary rows for every eligible fund, in sheet order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTable {
    pub reference_sheet: String,
    pub rows: Vec<FundSummaryRow>,
}

impl SummaryTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn funds(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.fund.as_str())
    }

    pub fn row(&self, fund: &str) -> Option<&FundSummaryRow> {
        self.rows.iter().find(|row| row.fund == fund)
    }

    pub fn fallback_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.asset_basis.is_fallback())
            .count()
    }
}
