//! CLI result presenter.

use std::time::Duration;

use primecalc_core::{PrimeSequence, DEFAULT_ROW_WIDTH};

use crate::locale::Language;
use crate::output::{
    format_duration, format_inline, format_json, format_list, format_table, rule, OutputFormat,
};
use crate::ui;

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present an enumerated sequence.
    fn present_result(&self, seq: &PrimeSequence, duration: Duration);

    /// Present the verdict for a single primality check.
    fn present_check(&self, n: i64, prime: bool);
}

/// CLI result presenter.
#[derive(Debug, Clone)]
pub struct CLIResultPresenter {
    lang: Language,
    format: OutputFormat,
    per_row: usize,
    verbose: bool,
    quiet: bool,
    color: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(lang: Language, format: OutputFormat) -> Self {
        Self {
            lang,
            format,
            per_row: DEFAULT_ROW_WIDTH,
            verbose: false,
            quiet: false,
            color: false,
        }
    }

    #[must_use]
    pub fn per_row(mut self, per_row: usize) -> Self {
        self.per_row = per_row.max(1);
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[must_use]
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.lang
    }

    /// Render the full stdout text for a sequence, newline terminated.
    #[must_use]
    pub fn render_result(&self, seq: &PrimeSequence, duration: Duration) -> String {
        if self.quiet {
            return format!("{}\n", format_inline(seq));
        }

        match self.format {
            OutputFormat::List => format_list(seq),
            // Serializing a struct of integers cannot fail.
            OutputFormat::Json => format!("{}\n", format_json(seq).unwrap_or_default()),
            OutputFormat::Table => self.render_table(seq, duration),
        }
    }

    fn render_table(&self, seq: &PrimeSequence, duration: Duration) -> String {
        let mut lines = Vec::with_capacity(seq.len() / self.per_row + 10);
        lines.push(ui::header(&self.lang.header(seq.len()), self.color));
        lines.push(rule('='));
        lines.push(self.lang.listing(seq.len()));
        lines.push(rule('-'));
        lines.extend(format_table(seq, self.per_row));
        lines.push(rule('-'));
        if let Some(largest) = seq.largest() {
            lines.push(ui::highlight(&self.lang.largest(largest), self.color));
        }
        lines.push(self.lang.total(seq.len()));
        if self.verbose {
            lines.push(self.lang.elapsed(&format_duration(duration)));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, seq: &PrimeSequence, duration: Duration) {
        print!("{}", self.render_result(seq, duration));
    }

    fn present_check(&self, n: i64, prime: bool) {
        if self.quiet {
            println!("{prime}");
        } else {
            println!("{}", self.lang.verdict(n, prime));
        }
    }
}
