//! CLI argument definitions for the wine preprocessing pipeline.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "wine-prep",
    version,
    about = "Combine, split and standardize the red and white wine quality datasets",
    long_about = "Combine the red and white wine quality datasets, hold out a seeded test split,\n\
                  and write the standardized training features as CSV.\n\n\
                  The output path first receives a raw snapshot of the red source and is then\n\
                  overwritten with the transformed table."
)]
pub struct Cli {
    /// Semicolon-delimited red wine CSV.
    #[arg(long = "input-red", alias = "input_red", value_name = "PATH")]
    pub input_red: PathBuf,

    /// Semicolon-delimited white wine CSV.
    #[arg(long = "input-white", alias = "input_white", value_name = "PATH")]
    pub input_white: PathBuf,

    /// Destination for the transformed training features.
    #[arg(long = "out-file", alias = "out_file", value_name = "PATH")]
    pub out_file: PathBuf,

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
