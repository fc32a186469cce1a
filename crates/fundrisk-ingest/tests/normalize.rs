//! Property tests for workbook normalization.

use fundrisk_ingest::{is_plain_number, normalize, normalize_sheet};
use fundrisk_model::{CellValue, RawCell, RawSheet, RawWorkbook};
use proptest::prelude::*;

fn raw_cell() -> impl Strategy<Value = RawCell> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[ -~]{1,8}".prop_map(Some),
        any::<i64>().prop_map(|value| Some(value.to_string())),
        (-1.0e6f64..1.0e6).prop_map(|value| Some(format!("{value:.3}"))),
        "X000[0-9]".prop_map(Some),
        Just(Some("1,234".to_string())),
        Just(Some("80%".to_string())),
    ]
}

fn raw_sheet() -> impl Strategy<Value = RawSheet> {
    prop::collection::vec(prop::collection::vec(raw_cell(), 0..5), 0..8)
        .prop_map(|rows| RawSheet::new("Sheet", rows))
}

fn is_blank(cell: &RawCell) -> bool {
    cell.as_deref().is_none_or(str::is_empty)
}

proptest! {
    #[test]
    fn text_cells_round_trip(sheet in raw_sheet()) {
        let table = normalize_sheet(&sheet);
        let data_rows: Vec<&Vec<RawCell>> = sheet
            .rows
            .iter()
            .filter(|row| !row.iter().all(is_blank))
            .skip(1)
            .collect();
        prop_assert_eq!(table.height(), data_rows.len());
        for (row_index, raw_row) in data_rows.iter().enumerate() {
            for (col_index, cell) in raw_row.iter().enumerate() {
                let value = &table.rows()[row_index][col_index];
                match cell.as_deref() {
                    None | Some("") => prop_assert_eq!(value, &CellValue::Missing),
                    Some(text) if !is_plain_number(text) => {
                        prop_assert_eq!(value, &CellValue::Text(text.to_string()));
                    }
                    Some(_) => prop_assert!(!matches!(value, CellValue::Missing)),
                }
            }
        }
    }

    #[test]
    fn normalize_is_idempotent(sheets in prop::collection::vec(raw_sheet(), 1..4)) {
        let raw = sheets
            .into_iter()
            .enumerate()
            .fold(RawWorkbook::new(), |workbook, (index, mut sheet)| {
                sheet.name = format!("Sheet{index}");
                workbook.with_sheet(sheet)
            });
        let once = normalize(&raw);
        let twice = normalize(&once.to_raw());
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn mixed_column_is_coerced_per_cell() {
    let sheet = RawSheet::from_strings(
        "FundA",
        &[&["VAN (S/)"], &["400"], &["n/a"], &["12.5"], &["1,000"]],
    );
    let table = normalize_sheet(&sheet);
    let values: Vec<&CellValue> = table.column_values("VAN (S/)").unwrap().collect();
    assert_eq!(
        values,
        vec![
            &CellValue::Integer(400),
            &CellValue::from("n/a"),
            &CellValue::Float(12.5),
            &CellValue::from("1,000"),
        ]
    );
}
