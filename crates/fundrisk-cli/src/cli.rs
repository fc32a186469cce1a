//! CLI argument definitions for the fund risk monitor.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use fundrisk_core::{DEFAULT_DURATION_RANGE, DEFAULT_EQUITY_RANGE, DEFAULT_FIXED_INCOME_RANGE};

#[derive(Parser)]
#[command(
    name = "fundrisk",
    version,
    about = "Fund risk exposure monitor - summarize fund holdings and check threshold compliance",
    long_about = "Summarize per-fund exposure from a holdings workbook.\n\n\
                  Computes fixed-income and equity ratios against each fund's total\n\
                  assets and the NPV-weighted Macaulay duration, then checks every\n\
                  metric against a tolerance range."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix each log event with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Skip span close events in json logs.
    #[arg(long = "no-log-spans", global = true)]
    pub no_log_spans: bool,

    /// Include holding and asset amounts in log output.
    ///
    /// Amounts are redacted by default.
    #[arg(long = "log-values", global = true)]
    pub log_values: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the sheets of a workbook with their size and role.
    Sheets(SheetsArgs),

    /// Compute the per-fund exposure summary.
    Summary(SummaryArgs),

    /// Compute the summary and check it against threshold ranges.
    Evaluate(EvaluateArgs),
}

#[derive(Args)]
pub struct SheetsArgs {
    /// Workbook file (XLSX, XLS, ODS, CSV) or a folder of CSV files.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    #[command(flatten)]
    pub columns: ColumnArgs,
}

#[derive(Args)]
pub struct SummaryArgs {
    /// Workbook file (XLSX, XLS, ODS, CSV) or a folder of CSV files.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Sheet holding each fund's total assets.
    #[arg(long = "reference", short = 'r', value_name = "SHEET")]
    pub reference: Option<String>,

    /// JSON file with column names and instrument code sets.
    ///
    /// Command-line flags override values from the file.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub columns: ColumnArgs,

    #[command(flatten)]
    pub codes: CodeArgs,

    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(Args)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub summary: SummaryArgs,

    /// Fixed-income tolerance range, e.g. "80% - 100%".
    #[arg(long = "rf", value_name = "RANGE", default_value = DEFAULT_FIXED_INCOME_RANGE)]
    pub fixed_income: String,

    /// Equity tolerance range, e.g. "0% - 20%".
    #[arg(long = "rv", value_name = "RANGE", default_value = DEFAULT_EQUITY_RANGE)]
    pub equity: String,

    /// Weighted duration range in years, e.g. "0 - 3".
    #[arg(long = "duration", value_name = "RANGE", default_value = DEFAULT_DURATION_RANGE)]
    pub duration: String,

    /// Exit with status 2 when any metric is out of range.
    #[arg(long = "fail-on-alert")]
    pub fail_on_alert: bool,
}

/// Column name overrides.
#[derive(Args, Default)]
pub struct ColumnArgs {
    /// Instrument code column in fund sheets.
    #[arg(long = "instrument-column", value_name = "NAME")]
    pub instrument: Option<String>,

    /// Net present value column in fund sheets.
    #[arg(long = "npv-column", value_name = "NAME")]
    pub net_present_value: Option<String>,

    /// Macaulay duration column in fund sheets.
    #[arg(long = "duration-column", value_name = "NAME")]
    pub duration: Option<String>,

    /// Fund name column in the reference sheet.
    #[arg(long = "fund-column", value_name = "NAME")]
    pub fund: Option<String>,

    /// Total asset column in the reference sheet.
    #[arg(long = "asset-column", value_name = "NAME")]
    pub assets: Option<String>,
}

/// Instrument code set overrides.
#[derive(Args, Default)]
pub struct CodeArgs {
    /// Instrument codes counted as fixed income (comma separated).
    #[arg(long = "fixed-income-codes", value_name = "CODES", value_delimiter = ',')]
    pub fixed_income: Option<Vec<String>>,

    /// Instrument codes counted as equity (comma separated).
    #[arg(long = "equity-codes", value_name = "CODES", value_delimiter = ',')]
    pub equity: Option<Vec<String>>,
}

#[derive(Args, Default)]
pub struct ExportArgs {
    /// Write the result table as CSV.
    #[arg(long = "csv", value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Write a JSON report including chart series.
    #[arg(long = "json", value_name = "FILE")]
    pub json: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
