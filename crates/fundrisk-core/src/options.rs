//! Configuration options for exposure analysis.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Default fixed-income range.
pub const DEFAULT_FIXED_INCOME_RANGE: &str = "80% - 100%";
/// Default equity range.
pub const DEFAULT_EQUITY_RANGE: &str = "0% - 20%";
/// Default weighted duration range, in years.
pub const DEFAULT_DURATION_RANGE: &str = "0 - 3";

/// Instrument codes counted as fixed income.
pub const FIXED_INCOME_CODES: &[&str] = &["X0001", "X0002", "X0003", "X0005", "X0007"];
/// Instrument codes counted as equity.
pub const EQUITY_CODES: &[&str] = &["X0006", "X0008"];

/// Column headers the analysis looks up by exact name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    /// Instrument code column in fund sheets.
    pub instrument: String,
    /// Net present value column in fund sheets.
    pub net_present_value: String,
    /// Macaulay duration column in fund sheets (optional per sheet).
    pub duration: String,
    /// Fund name column in the reference sheet.
    pub fund: String,
    /// Total asset column in the reference sheet.
    pub assets: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            instrument: "Instrumento".to_string(),
            net_present_value: "VAN (S/)".to_string(),
            duration: "Duración Macaulay".to_string(),
            fund: "Fondo".to_string(),
            assets: "Activo (S/.)".to_string(),
        }
    }
}

/// Instrument code sets for each asset class.
///
/// The sets are checked independently; a code listed in both counts toward
/// both ratios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstrumentClasses {
    pub fixed_income: BTreeSet<String>,
    pub equity: BTreeSet<String>,
}

impl Default for InstrumentClasses {
    fn default() -> Self {
        Self {
            fixed_income: FIXED_INCOME_CODES.iter().map(ToString::to_string).collect(),
            equity: EQUITY_CODES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl InstrumentClasses {
    pub fn is_fixed_income(&self, code: &str) -> bool {
        self.fixed_income.contains(code)
    }

    pub fn is_equity(&self, code: &str) -> bool {
        self.equity.contains(code)
    }
}

/// Options controlling exposure aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureOptions {
    pub columns: ColumnNames,
    pub instruments: InstrumentClasses,
}

impl ExposureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn with_fixed_income_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instruments.fixed_income = codes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_equity_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instruments.equity = codes.into_iter().map(Into::into).collect();
        self
    }
}

/// The three raw threshold strings as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdInputs {
    pub fixed_income: String,
    pub equity: String,
    pub duration: String,
}

impl Default for ThresholdInputs {
    fn default() -> Self {
        Self {
            fixed_income: DEFAULT_FIXED_INCOME_RANGE.to_string(),
            equity: DEFAULT_EQUITY_RANGE.to_string(),
            duration: DEFAULT_DURATION_RANGE.to_string(),
        }
    }
}

impl ThresholdInputs {
    pub fn new(
        fixed_income: impl Into<String>,
        equity: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            fixed_income: fixed_income.into(),
            equity: equity.into(),
            duration: duration.into(),
        }
    }
}
