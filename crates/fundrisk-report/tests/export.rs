//! Tests for CSV and JSON exports.

use std::fs;

use fundrisk_core::{evaluate_with_defaults, summarize};
use fundrisk_model::{
    CellValue, Metric, NormalizedTable, SummaryTable, Verdict, Workbook,
};
use fundrisk_report::{
    JsonReport, compliance_frame, summary_frame, write_csv, write_json_report,
};
use tempfile::TempDir;

fn table(columns: &[&str], rows: Vec<Vec<CellValue>>) -> NormalizedTable {
    NormalizedTable::new(columns.iter().map(ToString::to_string).collect(), rows)
}

fn summary() -> SummaryTable {
    let workbook = Workbook::new()
        .with_table(
            "Activos",
            table(
                &["Fondo", "Activo (S/.)"],
                vec![
                    vec!["FundA".into(), CellValue::Integer(1000)],
                    vec!["FundB".into(), CellValue::Integer(500)],
                ],
            ),
        )
        .with_table(
            "FundA",
            table(
                &["Instrumento", "VAN (S/)"],
                vec![
                    vec!["X0001".into(), CellValue::Integer(900)],
                    vec!["X0006".into(), CellValue::Integer(100)],
                ],
            ),
        )
        .with_table(
            "FundB",
            table(
                &["Instrumento", "VAN (S/)"],
                vec![vec!["X0008".into(), CellValue::Integer(400)]],
            ),
        );
    summarize(&workbook, "Activos").expect("summary")
}

#[test]
fn summary_csv_has_header_and_rows() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("out").join("summary.csv");
    let mut df = summary_frame(&summary()).expect("frame");

    write_csv(&mut df, &path).expect("write csv");

    let text = fs::read_to_string(&path).expect("read csv");
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("Fund,Fixed income,Equity,Weighted duration,Asset basis,Total assets")
    );
    assert!(lines.next().expect("first row").starts_with("FundA,"));
    assert!(lines.next().expect("second row").starts_with("FundB,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn compliance_csv_lists_verdicts() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("compliance.csv");
    let report = evaluate_with_defaults(&summary());
    let mut df = compliance_frame(&report.compliance).expect("frame");

    write_csv(&mut df, &path).expect("write csv");

    let text = fs::read_to_string(&path).expect("read csv");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Fund,Fixed income,Equity,Weighted duration,Alerts");
    assert_eq!(lines[1], "FundA,Compliant,Compliant,Compliant,0");
    assert_eq!(lines[2], "FundB,Alert,Alert,Compliant,2");
}

#[test]
fn json_report_round_trips() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("report.json");
    let report = evaluate_with_defaults(&summary());
    let json = JsonReport::from_evaluation(&report);

    write_json_report(&json, &path).expect("write json");

    let text = fs::read_to_string(&path).expect("read json");
    let parsed: JsonReport = serde_json::from_str(&text).expect("parse json");
    assert_eq!(parsed, json);
    assert_eq!(parsed.alert_count, 2);
    let chart = parsed.chart.expect("chart");
    let equity = chart.series(Metric::Equity).expect("equity series");
    assert_eq!(equity.points[1].verdict, Verdict::Alert);
}

#[test]
fn summary_only_report_omits_evaluation() {
    let json = JsonReport::from_summary(&summary());
    let value = serde_json::to_value(&json).expect("serialize");
    assert!(value.get("thresholds").is_none());
    assert!(value.get("chart").is_none());
    assert_eq!(value["funds"].as_array().map(Vec::len), Some(2));
}
