//! Raw and normalized workbook tables.
//!
//! A [`RawWorkbook`] is the verbatim text grid read from a spreadsheet file.
//! A [`Workbook`] holds the [`NormalizedTable`] built from each raw sheet.
//! Both keep sheets in source order.

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;

/// A raw cell: text as read from the source, `None` when empty.
pub type RawCell = Option<String>;

/// One sheet of a raw workbook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSheet {
    pub name: String,
    pub rows: Vec<Vec<RawCell>>,
}

impl RawSheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<RawCell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Builds a sheet from string literals, treating empty strings as blank.
    pub fn from_strings(name: impl Into<String>, rows: &[&[&str]]) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        if cell.is_empty() {
                            None
                        } else {
                            Some((*cell).to_string())
                        }
                    })
                    .collect()
            })
            .collect();
        Self::new(name, rows)
    }
}

/// Ordered collection of raw sheets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWorkbook {
    sheets: Vec<RawSheet>,
}

impl RawWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, sheet: RawSheet) -> Self {
        self.push_sheet(sheet);
        self
    }

    /// Appends a sheet. A sheet with an existing name replaces the earlier one
    /// in place.
    pub fn push_sheet(&mut self, sheet: RawSheet) {
        if let Some(existing) = self.sheets.iter_mut().find(|s| s.name == sheet.name) {
            *existing = sheet;
        } else {
            self.sheets.push(sheet);
        }
    }

    pub fn sheets(&self) -> &[RawSheet] {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&RawSheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

/// A sheet after header promotion and cell coercion.
///
/// Every data row has exactly one cell per column. Column lookups by name
/// resolve to the first column with that exact header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTable {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl NormalizedTable {
    /// Creates a table, padding short rows with `Missing` and widening the
    /// header when a row is longer than it.
    pub fn new(mut columns: Vec<String>, mut rows: Vec<Vec<CellValue>>) -> Self {
        let width = rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(columns.len());
        while columns.len() < width {
            columns.push(unnamed_column(columns.len()));
        }
        for row in &mut rows {
            row.resize(width, CellValue::Missing);
        }
        Self { columns, rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&CellValue> {
        let index = self.column_index(column)?;
        self.rows.get(row).and_then(|cells| cells.get(index))
    }

    /// Iterates the cells of one column, top to bottom.
    pub fn column_values<'a>(
        &'a self,
        name: &str,
    ) -> Option<impl Iterator<Item = &'a CellValue> + use<'a>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[index]))
    }

    /// Serializes the table back into a raw grid: header row first.
    pub fn to_raw_rows(&self) -> Vec<Vec<RawCell>> {
        if self.columns.is_empty() {
            return Vec::new();
        }
        let mut raw = Vec::with_capacity(self.rows.len() + 1);
        raw.push(self.columns.iter().cloned().map(Some).collect());
        raw.extend(
            self.rows
                .iter()
                .map(|row| row.iter().map(CellValue::to_raw).collect()),
        );
        raw
    }
}

/// Header used for a column whose header cell is blank.
pub fn unnamed_column(index: usize) -> String {
    format!("Unnamed: {index}")
}

/// Normalized workbook: sheet name to table, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    sheets: Vec<(String, NormalizedTable)>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, name: impl Into<String>, table: NormalizedTable) -> Self {
        self.insert(name, table);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, table: NormalizedTable) {
        let name = name.into();
        if let Some(entry) = self.sheets.iter_mut().find(|(key, _)| *key == name) {
            entry.1 = table;
        } else {
            self.sheets.push((name, table));
        }
    }

    pub fn get(&self, name: &str) -> Option<&NormalizedTable> {
        self.sheets
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, table)| table)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NormalizedTable)> {
        self.sheets
            .iter()
            .map(|(name, table)| (name.as_str(), table))
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Serialized form of every table, for re-ingestion.
    pub fn to_raw(&self) -> RawWorkbook {
        self.iter().fold(RawWorkbook::new(), |workbook, (name, table)| {
            workbook.with_sheet(RawSheet::new(name, table.to_raw_rows()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_rows_and_names_extra_columns() {
        let table = NormalizedTable::new(
            vec!["A".to_string()],
            vec![
                vec![CellValue::Integer(1), CellValue::from("x")],
                vec![],
            ],
        );
        assert_eq!(table.columns(), ["A", "Unnamed: 1"]);
        assert_eq!(table.rows()[1], vec![CellValue::Missing, CellValue::Missing]);
    }

    #[test]
    fn first_matching_column_wins() {
        let table = NormalizedTable::new(
            vec!["A".to_string(), "A".to_string()],
            vec![vec![CellValue::Integer(1), CellValue::Integer(2)]],
        );
        assert_eq!(table.value(0, "A"), Some(&CellValue::Integer(1)));
    }

    #[test]
    fn workbook_keeps_insertion_order() {
        let workbook = Workbook::new()
            .with_table("Zeta", NormalizedTable::empty())
            .with_table("Alpha", NormalizedTable::empty());
        assert_eq!(workbook.sheet_names(), vec!["Zeta", "Alpha"]);
    }
}
