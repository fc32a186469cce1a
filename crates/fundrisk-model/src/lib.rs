//! Data model shared by the fund risk pipeline crates.

pub mod cell;
pub mod compliance;
pub mod error;
pub mod summary;
pub mod table;

pub use cell::CellValue;
pub use compliance::{ComplianceRow, Metric, ThresholdRange, Thresholds, Verdict};
pub use error::{RangeParseError, RangeParseReason};
pub use summary::{AssetBasis, FundSummaryRow, SummaryTable};
pub use table::{NormalizedTable, RawCell, RawSheet, RawWorkbook, Workbook, unnamed_column};
