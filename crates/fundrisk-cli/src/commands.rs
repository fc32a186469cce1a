use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use fundrisk_cli::session::Session;
use fundrisk_cli::types::{SheetInfo, describe_sheets};
use fundrisk_core::{EvaluationReport, ExposureOptions, ThresholdInputs};
use fundrisk_ingest::load_workbook;
use fundrisk_model::{SummaryTable, Workbook};
use fundrisk_report::{
    JsonReport, compliance_frame, summary_frame, write_csv, write_json_report,
};

use crate::cli::{CodeArgs, ColumnArgs, EvaluateArgs, SheetsArgs, SummaryArgs};

pub fn run_sheets(args: &SheetsArgs) -> Result<Vec<SheetInfo>> {
    let workbook = load(&args.workbook)?;
    let options = apply_overrides(ExposureOptions::default(), &args.columns, &CodeArgs::default());
    Ok(describe_sheets(&workbook, &options.columns))
}

pub fn run_summary(args: &SummaryArgs) -> Result<SummaryTable> {
    let mut session = Session::new();
    generate(&mut session, args)?;
    let summary = session
        .summary()
        .cloned()
        .context("summary missing after generation")?;
    if let Some(path) = &args.export.csv {
        let mut df = summary_frame(&summary)?;
        write_csv(&mut df, path).with_context(|| format!("export {}", path.display()))?;
    }
    if let Some(path) = &args.export.json {
        write_json_report(&JsonReport::from_summary(&summary), path)
            .with_context(|| format!("export {}", path.display()))?;
    }
    Ok(summary)
}

pub fn run_evaluate(args: &EvaluateArgs) -> Result<EvaluationReport> {
    let mut session = Session::new();
    generate(&mut session, &args.summary)?;
    let inputs = ThresholdInputs::new(&args.fixed_income, &args.equity, &args.duration);
    let report = session.evaluate(&inputs)?;
    let export = &args.summary.export;
    if let Some(path) = &export.csv {
        let mut df = compliance_frame(&report.compliance)?;
        write_csv(&mut df, path).with_context(|| format!("export {}", path.display()))?;
    }
    if let Some(path) = &export.json {
        write_json_report(&JsonReport::from_evaluation(&report), path)
            .with_context(|| format!("export {}", path.display()))?;
    }
    Ok(report)
}

fn generate(session: &mut Session, args: &SummaryArgs) -> Result<()> {
    let workbook = load(&args.workbook)?;
    let reference = reference_sheet(&workbook, args.reference.as_deref())?;
    let options = exposure_options(args)?;
    let span = info_span!("generate", reference = %reference);
    let _guard = span.enter();
    session.generate(&workbook, reference, &options)?;
    Ok(())
}

fn load(path: &Path) -> Result<Workbook> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let workbook =
        load_workbook(path).with_context(|| format!("load workbook {}", path.display()))?;
    info!(sheets = workbook.len(), "workbook normalized");
    Ok(workbook)
}

fn reference_sheet<'a>(workbook: &Workbook, requested: Option<&'a str>) -> Result<&'a str> {
    match requested {
        Some(sheet) => Ok(sheet),
        None => bail!(
            "choose a reference sheet with --reference; available sheets: {}",
            workbook.sheet_names().join(", ")
        ),
    }
}

/// Options from `--config`, then the individual flags on top.
fn exposure_options(args: &SummaryArgs) -> Result<ExposureOptions> {
    let base = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parse config {}", path.display()))?
        }
        None => ExposureOptions::default(),
    };
    Ok(apply_overrides(base, &args.columns, &args.codes))
}

fn apply_overrides(
    mut options: ExposureOptions,
    columns: &ColumnArgs,
    codes: &CodeArgs,
) -> ExposureOptions {
    let names = &mut options.columns;
    for (target, value) in [
        (&mut names.instrument, &columns.instrument),
        (&mut names.net_present_value, &columns.net_present_value),
        (&mut names.duration, &columns.duration),
        (&mut names.fund, &columns.fund),
        (&mut names.assets, &columns.assets),
    ] {
        if let Some(value) = value {
            target.clone_from(value);
        }
    }
    if let Some(fixed_income) = &codes.fixed_income {
        options = options.with_fixed_income_codes(fixed_income.iter().cloned());
    }
    if let Some(equity) = &codes.equity {
        options = options.with_equity_codes(equity.iter().cloned());
    }
    options
}
