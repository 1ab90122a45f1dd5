//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "census",
    version,
    about = "Normalize census survey submissions into relational records",
    long_about = "Normalize household, business and building survey submissions.\n\n\
                  Coded answers are decoded against versioned choice tables and the\n\
                  resulting records are upserted into a SQLite database."
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

    /// Allow raw answer values (names, phone numbers) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize submission files and write the records.
    Ingest(IngestArgs),

    /// List the loaded choice tables.
    Tables(ChoicesArgs),

    /// Verify the choice table manifest and file hashes.
    Verify(ChoicesArgs),
}

#[derive(Parser)]
pub struct IngestArgs {
    /// Submission files (.json, .ndjson, .jsonl) or directories of them.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Survey form the submissions were collected with.
    #[arg(long = "form", value_enum)]
    pub form: FormArg,

    /// SQLite database to write.
    #[arg(long = "db", value_name = "PATH", default_value = "census.db")]
    pub db: PathBuf,

    /// Process everything but keep records in memory only.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write a submission only if every element extracts cleanly.
    #[arg(long = "strict")]
    pub strict: bool,

    #[command(flatten)]
    pub choices: ChoicesArgs,
}

#[derive(Args, Clone)]
pub struct ChoicesArgs {
    /// Standards root containing `choices/<version>/`
    /// (default: $CENSUS_STANDARDS_DIR, then the bundled `standards/`).
    #[arg(long = "choices-dir", value_name = "DIR")]
    pub choices_dir: Option<PathBuf>,

    /// Choice table release.
    #[arg(long = "choices-version", value_name = "VERSION", default_value = census_standards::DEFAULT_CHOICES_VERSION)]
    pub choices_version: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormArg {
    Household,
    Business,
    Building,
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
