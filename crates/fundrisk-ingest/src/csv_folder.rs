//! CSV sheets: a single file, or a folder read as a workbook.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use fundrisk_model::{RawCell, RawSheet, RawWorkbook};
use tracing::debug;

use crate::error::{IngestError, Result};

pub fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::FileNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() && is_csv(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Sheet name for a CSV file: its file stem.
pub fn sheet_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Reads one CSV file as a raw sheet. No header handling happens here.
pub fn read_csv_sheet(path: &Path) -> Result<RawSheet> {
    let csv_error = |source| IngestError::CsvRead {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let row: Vec<RawCell> = record
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let value = if index == 0 && rows.is_empty() {
                    value.trim_start_matches('\u{feff}')
                } else {
                    value
                };
                if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            })
            .collect();
        rows.push(row);
    }
    Ok(RawSheet::new(sheet_name(path), rows))
}

/// Reads every CSV file in `dir` as one sheet of a workbook.
pub fn read_csv_folder(dir: &Path) -> Result<RawWorkbook> {
    let files = list_csv_files(dir)?;
    if files.is_empty() {
        return Err(IngestError::EmptyWorkbook {
            path: dir.to_path_buf(),
        });
    }
    let mut workbook = RawWorkbook::new();
    for path in files {
        let sheet = read_csv_sheet(&path)?;
        debug!(sheet = %sheet.name, rows = sheet.rows.len(), "read csv sheet");
        workbook.push_sheet(sheet);
    }
    Ok(workbook)
}
