//! CLI argument definitions for the barcode sets converter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sets",
    version,
    about = "Convert barcode inventory sheets into sets XML",
    long_about = "Convert an inventory sheet (header row, identifier column, barcode columns)\n\
                  into a sets XML document and deliver it.\n\n\
                  Reads xlsx, xlsm, xlsb, xls, ods and csv files."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a sheet into a sets document, write it, and deliver it.
    Convert(ConvertArgs),

    /// Validate a sheet and list duplicate identifiers and short values.
    Check(InputArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// Inventory sheet to read.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Worksheet to read (default: the first one).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// TOML configuration file.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reject identifiers and barcodes of this many bytes or fewer.
    #[arg(long = "min-length", value_name = "N")]
    pub min_length: Option<usize>,
}

#[derive(Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// File name of the document, locally and at the destination.
    #[arg(long = "output-name", value_name = "NAME")]
    pub output_name: Option<String>,

    /// Directory the document is written to before delivery.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Deliver the document into this directory.
    #[arg(long = "deliver-to", value_name = "DIR")]
    pub deliver_to: Option<PathBuf>,

    /// Print the document to stdout instead of writing and delivering it.
    #[arg(long = "stdout", conflicts_with_all = ["deliver_to", "dry_run"])]
    pub stdout: bool,

    /// Validate and build without writing or delivering anything.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Summary format.
    #[arg(long = "report", value_enum, default_value = "text")]
    pub report: ReportFormatArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Json,
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
