//! CLI argument definitions for the catalog tools.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use kdb_cli::decode::NotationKind;

#[derive(Parser)]
#[command(
    name = "kdb",
    version,
    about = "Course catalog notation decoder",
    long_about = "Decode the compressed notations of a university course catalog export.\n\n\
                  `decode` reads a single field; `normalize` turns a whole CSV export\n\
                  into newline-delimited JSON records."
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
    /// Decode one field's notation and print it as JSON.
    Decode(DecodeArgs),

    /// Normalize a catalog CSV export into JSON lines.
    Normalize(NormalizeArgs),
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// Which column's notation the text is written in.
    #[arg(value_enum)]
    pub kind: NotationKind,

    /// Field text exactly as it appears in the catalog.
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// UTF-8 catalog export with a header row.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Write records to this file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// TOML file with normalization options. Flags override its values.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Academic year stamped on every record.
    #[arg(long = "year", value_name = "YEAR")]
    pub year: Option<i32>,

    /// What to do with rows that fail to decode.
    #[arg(long = "on-error", value_enum)]
    pub on_error: Option<ErrorPolicyArg>,

    /// Number of decoding threads.
    #[arg(long = "workers", value_name = "N")]
    pub workers: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ErrorPolicyArg {
    /// Stop at the first rejected row.
    Abort,
    /// Report rejected rows and continue.
    Skip,
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
