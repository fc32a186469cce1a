//! Raw workbook to typed tables.
//!
//! Each sheet loses its entirely blank rows, then the first remaining row
//! becomes the header and every other cell goes through
//! [`coerce_cell`](crate::numeric::coerce_cell).

use fundrisk_model::{
    CellValue, NormalizedTable, RawCell, RawSheet, RawWorkbook, Workbook, unnamed_column,
};
use tracing::{debug, info_span};

use crate::numeric::coerce_cell;

fn is_blank(cell: &RawCell) -> bool {
    cell.as_deref().is_none_or(str::is_empty)
}

fn is_blank_row(row: &[RawCell]) -> bool {
    row.iter().all(is_blank)
}

fn header_name(index: usize, cell: &RawCell) -> String {
    match cell.as_deref() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => unnamed_column(index),
    }
}

/// Normalize a single sheet.
pub fn normalize_sheet(sheet: &RawSheet) -> NormalizedTable {
    let mut rows = sheet.rows.iter().filter(|row| !is_blank_row(row));
    let Some(header) = rows.next() else {
        debug!(sheet = %sheet.name, "sheet is empty after dropping blank rows");
        return NormalizedTable::empty();
    };
    let columns: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(index, cell)| header_name(index, cell))
        .collect();
    let data: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(coerce_cell).collect())
        .collect();
    let table = NormalizedTable::new(columns, data);
    debug!(
        sheet = %sheet.name,
        columns = table.width(),
        rows = table.height(),
        dropped = sheet.rows.len().saturating_sub(table.height() + 1),
        "normalized sheet"
    );
    table
}

/// Normalize every sheet, preserving sheet order.
pub fn normalize(workbook: &RawWorkbook) -> Workbook {
    let span = info_span!("normalize", sheets = workbook.len());
    let _guard = span.enter();
    workbook
        .sheets()
        .iter()
        .fold(Workbook::new(), |normalized, sheet| {
            normalized.with_table(sheet.name.clone(), normalize_sheet(sheet))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_blank_rows_before_header() {
        let sheet = RawSheet::from_strings(
            "FundA",
            &[
                &["", ""],
                &["Instrumento", "VAN (S/)"],
                &["", ""],
                &["X0001", "400"],
            ],
        );
        let table = normalize_sheet(&sheet);
        assert_eq!(table.columns(), ["Instrumento", "VAN (S/)"]);
        assert_eq!(table.height(), 1);
        assert_eq!(table.value(0, "VAN (S/)"), Some(&CellValue::Integer(400)));
    }

    #[test]
    fn empty_sheet_has_no_rows() {
        let sheet = RawSheet::from_strings("Empty", &[&["", ""], &[""]]);
        let table = normalize_sheet(&sheet);
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
    }

    #[test]
    fn header_only_sheet() {
        let sheet = RawSheet::from_strings("Header", &[&["Fondo", "Activo (S/.)"]]);
        let table = normalize_sheet(&sheet);
        assert_eq!(table.width(), 2);
        assert_eq!(table.height(), 0);
    }

    #[test]
    fn blank_header_cells_get_positional_names() {
        let sheet = RawSheet::from_strings("FundA", &[&["Instrumento", ""], &["X0001", "1"]]);
        let table = normalize_sheet(&sheet);
        assert_eq!(table.columns(), ["Instrumento", "Unnamed: 1"]);
    }

    #[test]
    fn numeric_header_stays_text() {
        let sheet = RawSheet::from_strings("FundA", &[&["2024"], &["5"]]);
        let table = normalize_sheet(&sheet);
        assert_eq!(table.columns(), ["2024"]);
        assert_eq!(table.value(0, "2024"), Some(&CellValue::Integer(5)));
    }

    #[test]
    fn keeps_sheet_order() {
        let workbook = RawWorkbook::new()
            .with_sheet(RawSheet::from_strings("Zeta", &[&["A"]]))
            .with_sheet(RawSheet::from_strings("Alpha", &[&["B"]]));
        assert_eq!(normalize(&workbook).sheet_names(), vec!["Zeta", "Alpha"]);
    }
}
