//! Spreadsheet reading through calamine.
//!
//! Every cell is turned into text the way a string-typed spreadsheet load
//! would see it, so the normalizer decides on types later.

use std::path::Path;

use calamine::{Data, ExcelDateTime, Range, Reader, open_workbook_auto};
use fundrisk_model::{RawCell, RawSheet, RawWorkbook};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Spreadsheet extensions handled by calamine.
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Largest magnitude printed as an integer when a float has no fraction.
const INTEGRAL_LIMIT: f64 = 1e15;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SPREADSHEET_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Reads every worksheet of a spreadsheet file, in workbook order.
pub fn read_spreadsheet(path: &Path) -> Result<RawWorkbook> {
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;
    let mut raw = RawWorkbook::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|source| IngestError::SheetRead {
                path: path.to_path_buf(),
                sheet: name.clone(),
                source,
            })?;
        let rows = range_to_rows(&range);
        debug!(sheet = %name, rows = rows.len(), "read worksheet");
        raw.push_sheet(RawSheet::new(name, rows));
    }
    Ok(raw)
}

/// Converts a calamine range into a text grid.
///
/// calamine trims leading empty columns; they are restored as blank cells
/// so that column positions match the sheet.
pub fn range_to_rows(range: &Range<Data>) -> Vec<Vec<RawCell>> {
    let leading = range.start().map_or(0, |(_, col)| col as usize);
    range
        .rows()
        .map(|row| {
            let mut cells = Vec::with_capacity(leading + row.len());
            cells.resize(leading, None);
            cells.extend(row.iter().map(cell_text));
            cells
        })
        .collect()
}

/// Text form of one spreadsheet cell. Empty cells have none.
pub fn cell_text(cell: &Data) -> RawCell {
    let text = match cell {
        Data::Empty => return None,
        Data::String(value) => value.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => format_float(*value),
        Data::Bool(value) => if *value { "True" } else { "False" }.to_string(),
        Data::DateTime(value) => format_datetime(value),
        Data::DateTimeIso(value) | Data::DurationIso(value) => value.clone(),
        Data::Error(error) => error.to_string(),
        #[allow(unreachable_patterns)]
        other => other.to_string(),
    };
    if text.is_empty() { None } else { Some(text) }
}

/// Dates print as `YYYY-MM-DD HH:MM:SS`. Durations and serials outside the
/// calendar keep their numeric form.
fn format_datetime(value: &ExcelDateTime) -> String {
    if value.is_duration() {
        return format_float(value.as_f64());
    }
    value.as_datetime().map_or_else(
        || format_float(value.as_f64()),
        |datetime| datetime.format(DATETIME_FORMAT).to_string(),
    )
}

fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < INTEGRAL_LIMIT {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
