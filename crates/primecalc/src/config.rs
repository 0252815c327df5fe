//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use primecalc_cli::{Language, OutputFormat};
use primecalc_core::{Options, DEFAULT_COUNT, DEFAULT_MAX_COUNT, DEFAULT_ROW_WIDTH};

/// PrimeCalc-rs: compute the first N prime numbers by trial division.
#[derive(Parser, Debug)]
#[command(name = "primecalc", version, about)]
pub struct AppConfig {
    /// Number of primes to compute.
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_COUNT,
        env = "PRIMECALC_COUNT",
        allow_negative_numbers = true
    )]
    pub count: i64,

    /// Largest count accepted (inclusive).
    #[arg(long, default_value_t = DEFAULT_MAX_COUNT, env = "PRIMECALC_MAX_COUNT")]
    pub max_count: u64,

    /// Disable the count ceiling.
    #[arg(long)]
    pub no_limit: bool,

    /// Message language.
    #[arg(short, long, value_enum, default_value_t = Language::Es, env = "PRIMECALC_LANG")]
    pub lang: Language,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Primes per table row.
    #[arg(
        long,
        default_value_t = DEFAULT_ROW_WIDTH,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub per_row: usize,

    /// Test a single integer for primality and print only the verdict.
    #[arg(
        long,
        value_name = "N",
        allow_negative_numbers = true,
        conflicts_with_all = ["format", "output", "per_row"]
    )]
    pub check: Option<i64>,

    /// Verbose output (elapsed time, debug logs).
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only the numbers).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also write the primes to this file, one per line.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Enumeration options derived from the ceiling flags.
    #[must_use]
    pub fn options(&self) -> Options {
        if self.no_limit {
            Options::unlimited()
        } else {
            Options::with_max_count(self.max_count)
        }
    }

    /// Default log directive for this run.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}
