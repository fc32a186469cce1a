use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fundrisk_core::EvaluationReport;
use fundrisk_model::{FundSummaryRow, Metric, SummaryTable, Verdict};

use crate::types::{SheetInfo, SheetRole};

const FALLBACK_NOTE: &str =
    "* fund not found in the reference sheet; values are raw NPV sums, not ratios";

pub fn print_sheets(sheets: &[SheetInfo]) {
    println!("{}", sheets_table(sheets));
}

pub fn print_summary(summary: &SummaryTable) {
    println!("Reference sheet: {}", summary.reference_sheet);
    println!("{}", summary_table(summary));
    if summary.fallback_count() > 0 {
        println!("{FALLBACK_NOTE}");
    }
}

pub fn print_evaluation(report: &EvaluationReport) {
    print_summary(&report.summary);
    println!();
    println!("Compliance:");
    println!("{}", compliance_table(report));
    let alerts = alert_lines(report);
    if alerts.is_empty() {
        println!("All funds within range.");
    } else {
        println!();
        println!("Alerts:");
        for line in alerts {
            println!("- {line}");
        }
    }
}

pub fn sheets_table(sheets: &[SheetInfo]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Role"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for sheet in sheets {
        let role = match sheet.role {
            SheetRole::Reference => Cell::new(sheet.role.as_str()).fg(Color::Cyan),
            SheetRole::Fund => Cell::new(sheet.role.as_str()).fg(Color::Blue),
            SheetRole::Other => dim_cell(sheet.role.as_str()),
        };
        table.add_row(vec![
            Cell::new(&sheet.name),
            Cell::new(sheet.rows),
            Cell::new(sheet.columns),
            role,
        ]);
    }
    table
}

pub fn summary_table(summary: &SummaryTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Fund"),
        header_cell(Metric::FixedIncome.label()),
        header_cell(Metric::Equity.label()),
        header_cell(Metric::Duration.label()),
    ]);
    apply_summary_table_style(&mut table);
    for column in 1..=3 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for row in &summary.rows {
        table.add_row(vec![
            fund_cell(row),
            Cell::new(format_ratio(row.fixed_income)),
            Cell::new(format_ratio(row.equity)),
            Cell::new(format_duration(row.duration)),
        ]);
    }
    table
}

pub fn compliance_table(report: &EvaluationReport) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Fund")];
    for metric in Metric::ALL {
        let range = report.thresholds.range(metric);
        header.push(header_cell(&format!("{} ({range})", metric.label())));
    }
    table.set_header(header);
    apply_summary_table_style(&mut table);
    for column in 1..=3 {
        align_column(&mut table, column, CellAlignment::Center);
    }
    for row in &report.compliance {
        let mut cells = vec![
            Cell::new(&row.fund)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
        ];
        cells.extend(Metric::ALL.iter().map(|&metric| verdict_cell(row.verdict(metric))));
        table.add_row(cells);
    }
    table
}

/// One line per fund with alerts, naming each metric outside its range.
pub fn alert_lines(report: &EvaluationReport) -> Vec<String> {
    report
        .compliance
        .iter()
        .zip(&report.summary.rows)
        .filter(|(verdicts, _)| verdicts.has_alert())
        .map(|(verdicts, values)| {
            let details: Vec<String> = Metric::ALL
                .iter()
                .filter(|&&metric| verdicts.verdict(metric).is_alert())
                .map(|&metric| {
                    format!(
                        "{} {} outside {}",
                        metric.label().to_lowercase(),
                        format_metric(metric, values.metric(metric)),
                        report.thresholds.range(metric)
                    )
                })
                .collect();
            format!("{}: {}", verdicts.fund, details.join("; "))
        })
        .collect()
}

fn format_metric(metric: Metric, value: f64) -> String {
    match metric {
        Metric::Duration => format_duration(value),
        Metric::FixedIncome | Metric::Equity => format_ratio(value),
    }
}

fn format_ratio(value: f64) -> String {
    format!("{value:.4}")
}

fn format_duration(value: f64) -> String {
    format!("{value:.2}")
}

fn fund_cell(row: &FundSummaryRow) -> Cell {
    if row.asset_basis.is_fallback() {
        Cell::new(format!("{} *", row.fund)).fg(Color::Yellow)
    } else {
        Cell::new(&row.fund)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn verdict_cell(verdict: Verdict) -> Cell {
    match verdict {
        Verdict::Compliant => Cell::new(verdict.as_str()).fg(Color::Green),
        Verdict::Alert => Cell::new(verdict.as_str())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
