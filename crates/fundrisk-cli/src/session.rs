//! The current-summary slot shared by the generate and evaluate steps.

use fundrisk_core::{
    AnalysisError, EvaluationReport, ExposureOptions, ThresholdInputs, evaluate_summary,
    summarize_with_options,
};
use fundrisk_model::{RangeParseError, SummaryTable, Workbook};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no summary has been generated yet")]
    NoSummary,

    #[error(transparent)]
    Range(#[from] RangeParseError),
}

/// Holds at most one summary table.
///
/// A successful [`Session::generate`] replaces the slot. A failed one
/// leaves the previous summary in place.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<SummaryTable>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(
        &mut self,
        workbook: &Workbook,
        reference_sheet: &str,
        options: &ExposureOptions,
    ) -> Result<&SummaryTable, AnalysisError> {
        let summary = summarize_with_options(workbook, reference_sheet, options)?;
        Ok(&*self.current.insert(summary))
    }

    pub fn summary(&self) -> Option<&SummaryTable> {
        self.current.as_ref()
    }

    /// Reference sheet the current summary was built from.
    pub fn reference_sheet(&self) -> Option<&str> {
        self.current
            .as_ref()
            .map(|summary| summary.reference_sheet.as_str())
    }

    pub fn evaluate(&self, inputs: &ThresholdInputs) -> Result<EvaluationReport, SessionError> {
        let summary = self.current.as_ref().ok_or(SessionError::NoSummary)?;
        Ok(evaluate_summary(summary, inputs)?)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
