//! Workbook ingestion for the fund risk pipeline.
//!
//! This crate turns a workbook on disk into a [`RawWorkbook`] (verbatim text
//! cells) and normalizes it into typed tables.
//!
//! # Features
//!
//! - **Spreadsheets**: XLSX, XLSM, XLSB, XLS and ODS through calamine
//! - **CSV**: a single file, or a folder of CSV files read as one workbook
//! - **Normalization**: blank-row removal, header promotion and per-cell
//!   numeric coercion
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use fundrisk_ingest::load_workbook;
//!
//! let workbook = load_workbook(Path::new("carteras.xlsx"))?;
//! for name in workbook.sheet_names() {
//!     println!("{name}");
//! }
//! ```

mod csv_folder;
mod error;
mod normalize;
mod numeric;
mod spreadsheet;

use std::path::Path;

use fundrisk_model::{RawWorkbook, Workbook};
use tracing::info;

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use csv_folder::{list_csv_files, read_csv_folder, read_csv_sheet};
pub use spreadsheet::{SPREADSHEET_EXTENSIONS, cell_text, range_to_rows, read_spreadsheet};

// === Normalization ===
pub use normalize::{normalize, normalize_sheet};
pub use numeric::{coerce_cell, coerce_text, is_plain_number};

/// Reads a workbook from a spreadsheet file, a CSV file or a folder of CSVs.
pub fn read_workbook(path: &Path) -> Result<RawWorkbook> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let workbook = if path.is_dir() {
        read_csv_folder(path)?
    } else if spreadsheet::is_spreadsheet(path) {
        read_spreadsheet(path)?
    } else if csv_folder::is_csv(path) {
        RawWorkbook::new().with_sheet(read_csv_sheet(path)?)
    } else {
        return Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    };
    if workbook.is_empty() {
        return Err(IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        });
    }
    info!(
        path = %path.display(),
        sheets = workbook.len(),
        "workbook loaded"
    );
    Ok(workbook)
}

/// Reads and normalizes a workbook in one step.
pub fn load_workbook(path: &Path) -> Result<Workbook> {
    let raw = read_workbook(path)?;
    Ok(normalize(&raw))
}
