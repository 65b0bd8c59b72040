//! Barcode sets converter CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::info;
use tracing::level_filters::LevelFilter;

use sets_cli::logging::{LogConfig, LogFormat, init_logging};
use sets_cli::pipeline::PipelineError;
use sets_cli::transport::TransportError;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, ReportFormatArg};
use crate::commands::{run_check, run_convert};
use crate::summary::{print_check, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Convert(args) => match run_convert(&args) {
            Ok(report) => {
                match args.report {
                    ReportFormatArg::Text if args.stdout => eprintln!("{}", report.message),
                    ReportFormatArg::Text => print_summary(&report),
                    ReportFormatArg::Json => print_json(&report),
                }
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Check(args) => match run_check(&args) {
            Ok(report) => {
                print_check(&report);
                0
            }
            Err(error) => report_error(&error),
        },
    };
    std::process::exit(exit_code);
}

/// Print the failure and pick the exit code.
///
/// Pipeline failures show the submitter-facing message; the full error is
/// already in the log.
fn report_error(error: &anyhow::Error) -> i32 {
    if let Some(pipeline_error) = error.downcast_ref::<PipelineError>() {
        let message = pipeline_error.user_message();
        info!(%message, "alert");
        eprintln!("error: {message}");
        return 1;
    }
    if error.downcast_ref::<TransportError>().is_some() {
        eprintln!("error: {error:#}");
        return 2;
    }
    eprintln!("error: {error:#}");
    1
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(error) => eprintln!("error: failed to serialize report: {error}"),
    }
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
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
