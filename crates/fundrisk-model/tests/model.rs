use fundrisk_model::{
    AssetBasis, CellValue, ComplianceRow, FundSummaryRow, Metric, NormalizedTable, RawSheet,
    RawWorkbook, SummaryTable, Verdict, Workbook,
};

fn summary_row(fund: &str, basis: AssetBasis) -> FundSummaryRow {
    FundSummaryRow {
        fund: fund.to_string(),
        fixed_income: 0.85,
        equity: 0.1,
        duration: 2.5,
        asset_basis: basis,
    }
}

#[test]
fn raw_sheet_from_strings_treats_empty_as_blank() {
    let sheet = RawSheet::from_strings("FundA", &[&["Instrumento", ""], &["X0001", "400"]]);
    assert_eq!(sheet.rows[0][1], None);
    assert_eq!(sheet.rows[1][1], Some("400".to_string()));
}

#[test]
fn raw_workbook_replaces_duplicate_sheet_names() {
    let mut workbook = RawWorkbook::new()
        .with_sheet(RawSheet::from_strings("A", &[&["1"]]))
        .with_sheet(RawSheet::from_strings("B", &[&["2"]]));
    workbook.push_sheet(RawSheet::from_strings("A", &[&["3"]]));
    assert_eq!(workbook.sheet_names(), vec!["A", "B"]);
    assert_eq!(
        workbook.sheet("A").map(|sheet| sheet.rows.clone()),
        Some(vec![vec![Some("3".to_string())]])
    );
}

#[test]
fn table_serializes_header_first() {
    let table = NormalizedTable::new(
        vec!["Instrumento".to_string(), "VAN (S/)".to_string()],
        vec![vec![CellValue::from("X0001"), CellValue::Float(400.0)]],
    );
    let raw = table.to_raw_rows();
    assert_eq!(
        raw,
        vec![
            vec![Some("Instrumento".to_string()), Some("VAN (S/)".to_string())],
            vec![Some("X0001".to_string()), Some("400.0".to_string())],
        ]
    );
    let workbook = Workbook::new().with_table("FundA", table);
    assert_eq!(workbook.to_raw().sheet_names(), vec!["FundA"]);
}

#[test]
fn column_values_follow_row_order() {
    let table = NormalizedTable::new(
        vec!["VAN (S/)".to_string()],
        vec![vec![CellValue::Integer(1)], vec![CellValue::Missing]],
    );
    let values: Vec<_> = table.column_values("VAN (S/)").unwrap().collect();
    assert_eq!(values, vec![&CellValue::Integer(1), &CellValue::Missing]);
    assert!(table.column_values("Other").is_none());
}

#[test]
fn asset_basis_divisor() {
    assert_eq!(AssetBasis::Reported(1000.0).divisor(), 1000.0);
    assert_eq!(AssetBasis::Fallback.divisor(), 1.0);
}

#[test]
fn summary_table_counts_fallbacks() {
    let table = SummaryTable {
        reference_sheet: "Activos".to_string(),
        rows: vec![
            summary_row("FundA", AssetBasis::Reported(100.0)),
            summary_row("FundB", AssetBasis::Fallback),
        ],
    };
    assert_eq!(table.fallback_count(), 1);
    assert_eq!(table.funds().collect::<Vec<_>>(), vec!["FundA", "FundB"]);
    assert_eq!(table.row("FundB").map(|row| row.metric(Metric::Duration)), Some(2.5));
}

#[test]
fn compliance_row_alert_count() {
    let row = ComplianceRow {
        fund: "FundA".to_string(),
        fixed_income: Verdict::Compliant,
        equity: Verdict::Alert,
        duration: Verdict::Alert,
    };
    assert_eq!(row.alert_count(), 2);
    assert!(row.has_alert());
    assert_eq!(row.verdict(Metric::FixedIncome), Verdict::Compliant);
}

#[test]
fn summary_row_serializes() {
    let row = summary_row("FundA", AssetBasis::Fallback);
    let json = serde_json::to_string(&row).expect("serialize row");
    let round: FundSummaryRow = serde_json::from_str(&json).expect("deserialize row");
    assert_eq!(round, row);
    assert!(json.contains("\"kind\":\"fallback\""));
}
