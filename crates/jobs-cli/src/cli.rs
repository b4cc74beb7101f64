//! CLI argument definitions for the job-postings ETL.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "jobs-etl",
    version,
    about = "Job-postings ETL - stage, clean, and index job postings",
    long_about = "Move a job-postings dataset through the four-stage batch pipeline:\n\
                  load into the staging store, unload to a raw CSV, normalize fields\n\
                  (salary ranges, sentinel values, skill tags), and bulk-index the\n\
                  cleaned records for search."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Run the full four-stage pipeline over a source CSV.
    Run(RunArgs),

    /// Run only the cleaning stage over a raw CSV.
    Clean(CleanArgs),

    /// List the skill vocabulary used for tag extraction.
    Skills,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Source CSV of job postings.
    #[arg(value_name = "SOURCE_CSV")]
    pub source: PathBuf,

    /// Working directory for staging tables and intermediate files
    /// (default: "work" next to the source file).
    #[arg(long = "work-dir", value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Name of the staging table.
    #[arg(long = "staging-table", default_value = "postings_raw")]
    pub staging_table: String,

    /// Name of the target search index.
    #[arg(long = "index", default_value = "postings_clean")]
    pub index: String,

    /// Drop rows with malformed salary estimates instead of aborting.
    ///
    /// Without this flag a malformed row fails the whole run; the policy
    /// is always an explicit choice, never a silent default.
    #[arg(long = "drop-malformed")]
    pub drop_malformed: bool,

    /// Retries per stage after the first attempt.
    #[arg(long = "max-retries", default_value_t = 1)]
    pub max_retries: u32,

    /// Seconds to wait between stage attempts.
    #[arg(long = "retry-backoff-secs", default_value_t = 5)]
    pub retry_backoff_secs: u64,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Raw postings CSV to clean.
    #[arg(value_name = "RAW_CSV")]
    pub input: PathBuf,

    /// Output path for the cleaned CSV (default: "cleaned.csv" next to the
    /// input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Drop rows with malformed salary estimates instead of aborting.
    #[arg(long = "drop-malformed")]
    pub drop_malformed: bool,

    /// Run the transform and report counts without writing output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
