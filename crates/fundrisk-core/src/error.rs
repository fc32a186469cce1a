//! Error types for exposure analysis.

use fundrisk_model::RangeParseError;
use thiserror::Error;

/// Errors returned by the aggregation and evaluation stages.
///
/// None of these are fatal: the caller reports them and asks for new input
/// (another workbook, another reference sheet or another range string).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The chosen reference sheet is not part of the workbook.
    #[error("reference sheet '{sheet}' not found in workbook")]
    ReferenceSheetNotFound { sheet: String },

    /// The reference sheet lacks the fund name or total asset column.
    #[error("reference sheet '{sheet}' has no '{column}' column")]
    ReferenceColumnMissing { sheet: String, column: String },

    /// No fund sheet had both the instrument and net present value columns.
    #[error(
        "no sheet other than '{reference}' has both '{instrument_column}' and '{npv_column}' columns"
    )]
    NoEligibleSheets {
        reference: String,
        instrument_column: String,
        npv_column: String,
    },

    /// A threshold string could not be parsed.
    #[error(transparent)]
    RangeParse(#[from] RangeParseError),
}

impl AnalysisError {
    /// An empty result rather than bad input; callers may show it as a warning.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AnalysisError::NoEligibleSheets { .. })
    }
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
