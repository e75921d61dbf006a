//! CLI argument definitions for the roster validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use roster_validate::{MAX_DISTINCT_GROUP_VALUES, MINIMUM_ELIGIBLE_MEMBERS};

#[derive(Parser)]
#[command(
    name = "roster-check",
    version,
    about = "Validate eligible member rosters before risk predictor scoring",
    long_about = "Validate pipe-delimited eligible member rosters.\n\n\
                  Checks required columns, blank fields, single-group columns \
                  (roster ID, SIC / NAICS, state, zip) and the minimum number \
                  of distinct eligible members."
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

    /// Allow member field values in logs (they are PHI and redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate one or more roster files.
    Validate(ValidateArgs),

    /// List the validation rules in execution order.
    Rules,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Roster files to validate.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Fewest distinct Token4 values a roster must carry.
    #[arg(long = "min-members", value_name = "N", default_value_t = MINIMUM_ELIGIBLE_MEMBERS)]
    pub min_members: usize,

    /// Most distinct values allowed in a single-group column.
    #[arg(long = "max-distinct", value_name = "N", default_value_t = MAX_DISTINCT_GROUP_VALUES)]
    pub max_distinct: usize,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Stop at the first file that is invalid or cannot be read.
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
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
