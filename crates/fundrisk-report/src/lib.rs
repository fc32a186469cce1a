//! Report views for fund exposure results.
//!
//! - **Tables**: summary and compliance tables as Polars DataFrames
//! - **CSV**: DataFrame export through the Polars CSV writer
//! - **JSON**: a report document bundling the tables and chart series

mod chart;
mod error;
mod export;
mod frames;

pub use chart::{BandChart, BandSeries, CHART_TITLE, ChartPoint, metric_color};
pub use error::{ReportError, Result};
pub use export::{JsonReport, write_csv, write_json_report};
pub use frames::{
    ALERTS_COLUMN, ASSET_BASIS_COLUMN, FUND_COLUMN, TOTAL_ASSETS_COLUMN, basis_label,
    compliance_frame, metric_column, summary_frame,
};
