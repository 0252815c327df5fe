//! CLI output formatting.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;

use primecalc_core::{PrimeSequence, CELL_WIDTH};

/// Width of the `=` and `-` rules around the table.
pub const RULE_WIDTH: usize = 50;

/// How the prime sequence is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Localized report with rows of right-aligned numbers.
    #[default]
    Table,
    /// One prime per line.
    List,
    /// Single-line JSON object.
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    count: usize,
    largest: Option<u64>,
    primes: &'a PrimeSequence,
}

/// Format one table row: `"  1- 10:    2    3 ..."`.
#[must_use]
pub fn format_row(start: usize, end: usize, row: &[u64]) -> String {
    let mut line = format!("{start:>3}-{end:>3}:");
    for p in row {
        let _ = write!(line, " {p:>width$}", width = CELL_WIDTH);
    }
    line
}

/// Format the whole sequence as table rows of `per_row` primes.
#[must_use]
pub fn format_table(seq: &PrimeSequence, per_row: usize) -> Vec<String> {
    seq.rows(per_row)
        .map(|(start, row)| format_row(start, start + row.len() - 1, row))
        .collect()
}

/// One prime per line, newline terminated.
#[must_use]
pub fn format_list(seq: &PrimeSequence) -> String {
    let mut out = String::with_capacity(seq.len() * 6);
    for p in seq {
        let _ = writeln!(out, "{p}");
    }
    out
}

/// Primes separated by single spaces, for quiet mode.
#[must_use]
pub fn format_inline(seq: &PrimeSequence) -> String {
    seq.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `{"count":N,"largest":P,"primes":[...]}`.
pub fn format_json(seq: &PrimeSequence) -> serde_json::Result<String> {
    serde_json::to_string(&JsonReport {
        count: seq.len(),
        largest: seq.largest(),
        primes: seq,
    })
}

/// A horizontal rule of `RULE_WIDTH` characters.
#[must_use]
pub fn rule(c: char) -> String {
    std::iter::repeat(c).take(RULE_WIDTH).collect()
}

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// Write the primes to a file, one per line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, seq: &PrimeSequence) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    file.write_all(format_list(seq).as_bytes())?;
    file.flush()?;
    tracing::debug!(path = %path.display(), count = seq.len(), "primes written to file");
    Ok(())
}
