//! Error types for workbook ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a workbook from disk.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Workbook file or folder not found.
    #[error("workbook not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is not a supported spreadsheet format.
    #[error("unsupported workbook format: {path} (expected xlsx, xlsm, xlsb, xls, ods or csv)")]
    UnsupportedFormat { path: PathBuf },

    // === Spreadsheet Errors ===
    /// The spreadsheet container could not be opened.
    #[error("failed to open workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// A worksheet could not be read.
    #[error("failed to read sheet '{sheet}' in {path}: {source}")]
    SheetRead {
        path: PathBuf,
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    // === CSV Errors ===
    /// Failed to parse a CSV sheet.
    #[error("failed to read CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The workbook contains no sheets.
    #[error("workbook has no sheets: {path}")]
    EmptyWorkbook { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/funds.xlsx"),
        };
        assert_eq!(err.to_string(), "workbook not found: /path/to/funds.xlsx");
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = IngestError::UnsupportedFormat {
            path: PathBuf::from("funds.txt"),
        };
        assert!(err.to_string().starts_with("unsupported workbook format: funds.txt"));
    }
}
