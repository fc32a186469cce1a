//! Per-fund exposure aggregation.
//!
//! Every sheet other than the reference sheet is a fund. For each eligible
//! fund the aggregator sums net present values by asset class, divides by
//! the fund's total assets from the reference sheet and computes the
//! NPV-weighted Macaulay duration.

use fundrisk_model::{AssetBasis, CellValue, FundSummaryRow, NormalizedTable, SummaryTable, Workbook};
use tracing::{debug, info, info_span, warn};

use crate::error::{AnalysisError, Result};
use crate::options::{ColumnNames, ExposureOptions, InstrumentClasses};
use crate::redact::redact_amount;

/// Fund names and total assets from the reference sheet, in row order.
#[derive(Debug, Clone)]
pub struct AssetLookup {
    entries: Vec<(Option<String>, Option<f64>)>,
}

impl AssetLookup {
    /// Reads the fund and asset columns of the reference sheet.
    pub fn from_reference(
        sheet: &str,
        table: &NormalizedTable,
        columns: &ColumnNames,
    ) -> Result<Self> {
        let missing = |column: &str| AnalysisError::ReferenceColumnMissing {
            sheet: sheet.to_string(),
            column: column.to_string(),
        };
        let fund_index = table
            .column_index(&columns.fund)
            .ok_or_else(|| missing(&columns.fund))?;
        let asset_index = table
            .column_index(&columns.assets)
            .ok_or_else(|| missing(&columns.assets))?;
        let entries = table
            .rows()
            .iter()
            .map(|row| {
                let cell = &row[fund_index];
                let fund = (!cell.is_missing()).then(|| cell.to_string());
                (fund, row[asset_index].as_f64())
            })
            .collect();
        Ok(Self { entries })
    }

    /// Total assets for a fund sheet.
    ///
    /// The first reference row whose fund name contains `fund` (case
    /// sensitive, anywhere in the name) decides. No match, or a match
    /// without a numeric asset value, falls back to a divisor of 1.
    pub fn basis_for(&self, fund: &str) -> AssetBasis {
        let matched = self
            .entries
            .iter()
            .find(|(name, _)| name.as_deref().is_some_and(|name| name.contains(fund)));
        match matched {
            Some((_, Some(assets))) => AssetBasis::Reported(*assets),
            Some((name, None)) => {
                warn!(
                    fund,
                    reference_row = name.as_deref().unwrap_or_default(),
                    "reference row has no numeric asset value, ratios use raw sums"
                );
                AssetBasis::Fallback
            }
            None => {
                warn!(fund, "fund not found in reference sheet, ratios use raw sums");
                AssetBasis::Fallback
            }
        }
    }
}

/// Text used to match an instrument cell against the code sets.
fn instrument_code(cell: &CellValue) -> Option<String> {
    if cell.is_missing() {
        return None;
    }
    Some(cell.as_text().map_or_else(|| cell.to_string(), str::to_string))
}

#[derive(Debug, Default)]
struct ClassTotals {
    fixed_income_rows: usize,
    fixed_income_sum: f64,
    equity_rows: usize,
    equity_sum: f64,
    skipped_values: usize,
}

fn class_totals(
    table: &NormalizedTable,
    instrument_index: usize,
    npv_index: usize,
    instruments: &InstrumentClasses,
) -> ClassTotals {
    let mut totals = ClassTotals::default();
    for row in table.rows() {
        let Some(code) = instrument_code(&row[instrument_index]) else {
            continue;
        };
        let fixed_income = instruments.is_fixed_income(&code);
        let equity = instruments.is_equity(&code);
        if !fixed_income && !equity {
            continue;
        }
        let cell = &row[npv_index];
        if !cell.is_numeric() {
            totals.skipped_values += 1;
        }
        let value = cell.as_f64().unwrap_or(0.0);
        if fixed_income {
            totals.fixed_income_rows += 1;
            totals.fixed_income_sum += value;
        }
        if equity {
            totals.equity_rows += 1;
            totals.equity_sum += value;
        }
    }
    totals
}

/// NPV-weighted Macaulay duration of a fund sheet.
///
/// Rows without a numeric NPV or duration do not contribute. A sheet whose
/// NPVs sum to zero has a weighted duration of 0.
pub fn weighted_duration(table: &NormalizedTable, npv_column: &str, duration_column: &str) -> f64 {
    let (Some(npv_index), Some(duration_index)) = (
        table.column_index(npv_column),
        table.column_index(duration_column),
    ) else {
        return 0.0;
    };
    let total: f64 = table
        .rows()
        .iter()
        .filter_map(|row| row[npv_index].as_f64())
        .sum();
    if total == 0.0 {
        if !table.is_empty() {
            warn!(rows = table.height(), "net present values sum to zero, weighted duration set to 0");
        }
        return 0.0;
    }
    table
        .rows()
        .iter()
        .filter_map(|row| Some((row[npv_index].as_f64()?, row[duration_index].as_f64()?)))
        .map(|(npv, duration)| npv / total * duration)
        .sum()
}

/// Exposure figures for one fund sheet, or `None` if it is not eligible.
pub fn fund_exposure(
    fund: &str,
    table: &NormalizedTable,
    basis: AssetBasis,
    options: &ExposureOptions,
) -> Option<FundSummaryRow> {
    let columns = &options.columns;
    let instrument_index = table.column_index(&columns.instrument)?;
    let npv_index = table.column_index(&columns.net_present_value)?;
    let totals = class_totals(table, instrument_index, npv_index, &options.instruments);
    if totals.skipped_values > 0 {
        debug!(
            fund,
            skipped = totals.skipped_values,
            "non-numeric net present values ignored"
        );
    }
    let divisor = basis.divisor();
    let ratio = |rows: usize, sum: f64| if rows == 0 { 0.0 } else { sum / divisor };
    let duration = if table.has_column(&columns.duration) {
        weighted_duration(table, &columns.net_present_value, &columns.duration)
    } else {
        0.0
    };
    Some(FundSummaryRow {
        fund: fund.to_string(),
        fixed_income: ratio(totals.fixed_income_rows, totals.fixed_income_sum),
        equity: ratio(totals.equity_rows, totals.equity_sum),
        duration,
        asset_basis: basis,
    })
}

/// Summarize every fund sheet with the default column names and code sets.
pub fn summarize(workbook: &Workbook, reference_sheet: &str) -> Result<SummaryTable> {
    summarize_with_options(workbook, reference_sheet, &ExposureOptions::default())
}

/// Summarize every fund sheet against the reference sheet.
///
/// Sheets missing the instrument or NPV column are skipped. Rows come back
/// in workbook order.
pub fn summarize_with_options(
    workbook: &Workbook,
    reference_sheet: &str,
    options: &ExposureOptions,
) -> Result<SummaryTable> {
    let span = info_span!("summarize", reference = %reference_sheet);
    let _guard = span.enter();

    let reference =
        workbook
            .get(reference_sheet)
            .ok_or_else(|| AnalysisError::ReferenceSheetNotFound {
                sheet: reference_sheet.to_string(),
            })?;
    let assets = AssetLookup::from_reference(reference_sheet, reference, &options.columns)?;

    let mut rows = Vec::new();
    for (name, table) in workbook.iter() {
        if name == reference_sheet {
            continue;
        }
        if !table.has_column(&options.columns.instrument)
            || !table.has_column(&options.columns.net_present_value)
        {
            debug!(sheet = name, "sheet skipped, missing instrument or NPV column");
            continue;
        }
        let basis = assets.basis_for(name);
        if let Some(row) = fund_exposure(name, table, basis, options) {
            debug!(
                fund = name,
                rows = table.height(),
                divisor = %redact_amount(basis.divisor()),
                fallback = basis.is_fallback(),
                "fund summarized"
            );
            rows.push(row);
        }
    }

    if rows.is_empty() {
        return Err(AnalysisError::NoEligibleSheets {
            reference: reference_sheet.to_string(),
            instrument_column: options.columns.instrument.clone(),
            npv_column: options.columns.net_present_value.clone(),
        });
    }

    let summary = SummaryTable {
        reference_sheet: reference_sheet.to_string(),
        rows,
    };
    info!(
        funds = summary.len(),
        fallback = summary.fallback_count(),
        "summary complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::from(value)
    }

    fn fund_table(rows: Vec<Vec<CellValue>>) -> NormalizedTable {
        NormalizedTable::new(
            vec![
                "Instrumento".to_string(),
                "VAN (S/)".to_string(),
                "Duración Macaulay".to_string(),
            ],
            rows,
        )
    }

    #[test]
    fn weighted_duration_uses_npv_weights() {
        let table = fund_table(vec![
            vec![text("X0001"), CellValue::Integer(300), CellValue::Float(2.0)],
            vec![text("X0002"), CellValue::Integer(100), CellValue::Float(6.0)],
        ]);
        let duration = weighted_duration(&table, "VAN (S/)", "Duración Macaulay");
        assert!((duration - 3.0).abs() < 1e-12);
    }

    #[test]
    fn weighted_duration_skips_missing_durations() {
        let table = fund_table(vec![
            vec![text("X0001"), CellValue::Integer(50), CellValue::Float(4.0)],
            vec![text("X0006"), CellValue::Integer(50), CellValue::Missing],
        ]);
        let duration = weighted_duration(&table, "VAN (S/)", "Duración Macaulay");
        assert!((duration - 2.0).abs() < 1e-12);
    }

    #[test]
    fn weighted_duration_zero_total_is_zero() {
        let table = fund_table(vec![
            vec![text("X0001"), CellValue::Integer(100), CellValue::Float(4.0)],
            vec![text("X0002"), CellValue::Integer(-100), CellValue::Float(1.0)],
        ]);
        assert_eq!(weighted_duration(&table, "VAN (S/)", "Duración Macaulay"), 0.0);
    }

    #[test]
    fn empty_class_is_zero_even_with_zero_divisor() {
        let table = fund_table(vec![vec![
            text("X0001"),
            CellValue::Integer(10),
            CellValue::Missing,
        ]]);
        let row = fund_exposure(
            "FundA",
            &table,
            AssetBasis::Reported(0.0),
            &ExposureOptions::default(),
        )
        .expect("eligible");
        assert_eq!(row.equity, 0.0);
        assert!(row.fixed_income.is_infinite());
    }

    #[test]
    fn non_numeric_npv_is_ignored() {
        let table = fund_table(vec![
            vec![text("X0001"), text("n/a"), CellValue::Missing],
            vec![text("X0001"), CellValue::Integer(40), CellValue::Missing],
        ]);
        let row = fund_exposure(
            "FundA",
            &table,
            AssetBasis::Reported(100.0),
            &ExposureOptions::default(),
        )
        .expect("eligible");
        assert!((row.fixed_income - 0.4).abs() < 1e-12);
    }

    #[test]
    fn lookup_matches_first_containing_row() {
        let reference = NormalizedTable::new(
            vec!["Fondo".to_string(), "Activo (S/.)".to_string()],
            vec![
                vec![text("Fondo Conservador"), CellValue::Integer(10)],
                vec![text("Conservador II"), CellValue::Integer(20)],
            ],
        );
        let lookup =
            AssetLookup::from_reference("Activos", &reference, &ColumnNames::default()).unwrap();
        assert_eq!(lookup.basis_for("Conservador"), AssetBasis::Reported(10.0));
        assert_eq!(lookup.basis_for("II"), AssetBasis::Reported(20.0));
        assert_eq!(lookup.basis_for("conservador"), AssetBasis::Fallback);
    }

    #[test]
    fn lookup_without_asset_value_falls_back() {
        let reference = NormalizedTable::new(
            vec!["Fondo".to_string(), "Activo (S/.)".to_string()],
            vec![vec![text("FundA"), text("pending")]],
        );
        let lookup =
            AssetLookup::from_reference("Activos", &reference, &ColumnNames::default()).unwrap();
        assert_eq!(lookup.basis_for("FundA"), AssetBasis::Fallback);
    }
}
