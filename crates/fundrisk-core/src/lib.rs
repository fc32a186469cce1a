//! Exposure aggregation and threshold evaluation.
//!
//! Works on workbooks already normalized by `fundrisk-ingest`. Every
//! function here is pure apart from logging; nothing touches the file
//! system.
//!
//! ```ignore
//! use fundrisk_core::{summarize, evaluate_summary, ThresholdInputs};
//!
//! let summary = summarize(&workbook, "Activos")?;
//! let report = evaluate_summary(&summary, &ThresholdInputs::default())?;
//! println!("{} alerts", report.alert_count());
//! ```

mod aggregate;
mod error;
mod evaluate;
pub mod options;
mod range;
pub mod redact;

// === Error Types ===
pub use error::{AnalysisError, Result};

// === Aggregation ===
pub use aggregate::{
    AssetLookup, fund_exposure, summarize, summarize_with_options, weighted_duration,
};

// === Evaluation ===
pub use evaluate::{
    EvaluationReport, classify, default_thresholds, evaluate, evaluate_summary,
    evaluate_with_defaults, parse_thresholds,
};
pub use range::parse_range;

// === Configuration ===
pub use options::{
    ColumnNames, DEFAULT_DURATION_RANGE, DEFAULT_EQUITY_RANGE, DEFAULT_FIXED_INCOME_RANGE,
    EQUITY_CODES, ExposureOptions, FIXED_INCOME_CODES, InstrumentClasses, ThresholdInputs,
};
pub use redact::{log_values_enabled, set_log_values};
