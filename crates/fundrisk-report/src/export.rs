//! File exports: CSV tables and the JSON report document.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use serde::{Deserialize, Serialize};
use tracing::info;

use fundrisk_core::EvaluationReport;
use fundrisk_model::{ComplianceRow, FundSummaryRow, SummaryTable, Thresholds};

use crate::chart::BandChart;
use crate::error::{ReportError, Result};

fn io_error(path: &Path, source: std::io::Error) -> ReportError {
    ReportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn create_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| io_error(parent, source))?;
    }
    File::create(path).map_err(|source| io_error(path, source))
}

/// Writes a DataFrame as CSV with a header row, creating parent directories.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = create_file(path)?;
    CsvWriter::new(BufWriter::new(file))
        .include_header(true)
        .finish(df)?;
    info!(path = %path.display(), rows = df.height(), "csv written");
    Ok(())
}

/// Everything a downstream viewer needs to redraw the results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub reference_sheet: String,
    pub funds: Vec<FundSummaryRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Thresholds>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compliance: Vec<ComplianceRow>,
    pub alert_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<BandChart>,
}

impl JsonReport {
    /// A summary-only report, without verdicts or chart bands.
    pub fn from_summary(summary: &SummaryTable) -> Self {
        Self {
            reference_sheet: summary.reference_sheet.clone(),
            funds: summary.rows.clone(),
            thresholds: None,
            compliance: Vec::new(),
            alert_count: 0,
            chart: None,
        }
    }

    pub fn from_evaluation(report: &EvaluationReport) -> Self {
        Self {
            reference_sheet: report.summary.reference_sheet.clone(),
            funds: report.summary.rows.clone(),
            thresholds: Some(report.thresholds),
            compliance: report.compliance.clone(),
            alert_count: report.alert_count(),
            chart: Some(BandChart::from_report(report)),
        }
    }
}

/// Writes the report as pretty-printed JSON.
pub fn write_json_report(report: &JsonReport, path: &Path) -> Result<()> {
    let file = create_file(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)?;
    info!(path = %path.display(), funds = report.funds.len(), "json report written");
    Ok(())
}
