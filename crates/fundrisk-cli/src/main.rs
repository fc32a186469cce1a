//! Fund risk exposure monitor CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use fundrisk_cli::logging::{LogConfig, LogFormat, init_logging};
use fundrisk_cli::summary::{print_evaluation, print_sheets, print_summary};
use fundrisk_core::AnalysisError;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_evaluate, run_sheets, run_summary};

/// Exit status when `--fail-on-alert` is set and a metric is out of range.
const ALERT_EXIT_CODE: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Sheets(args) => match run_sheets(args) {
            Ok(sheets) => {
                print_sheets(&sheets);
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Summary(args) => match run_summary(args) {
            Ok(summary) => {
                print_summary(&summary);
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Evaluate(args) => match run_evaluate(args) {
            Ok(report) => {
                print_evaluation(&report);
                if args.fail_on_alert && report.has_alerts() {
                    ALERT_EXIT_CODE
                } else {
                    0
                }
            }
            Err(error) => report_error(&error),
        },
    };
    std::process::exit(exit_code);
}

fn report_error(error: &anyhow::Error) -> i32 {
    let recoverable = error
        .downcast_ref::<AnalysisError>()
        .is_some_and(AnalysisError::is_recoverable);
    if recoverable {
        eprintln!("warning: {error:#}");
    } else {
        eprintln!("error: {error:#}");
    }
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_values = cli.log_values;
    config.with_timestamps = cli.log_timestamps;
    config.with_target = cli.log_target;
    config.with_spans = !cli.no_log_spans;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
