//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use primecalc_cli::output::write_to_file;
use primecalc_cli::{ui, CLIResultPresenter, ResultPresenter};
use primecalc_core::{is_prime, PrimeEnumerator};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        primecalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let presenter = CLIResultPresenter::new(config.lang, config.format)
        .per_row(config.per_row)
        .verbose(config.verbose)
        .quiet(config.quiet)
        .color(ui::colors_wanted());

    if let Some(n) = config.check {
        presenter.present_check(n, is_prime(n));
        return Ok(());
    }

    run_enumeration(config, &presenter)
}

fn run_enumeration(config: &AppConfig, presenter: &dyn ResultPresenter) -> Result<()> {
    let enumerator = PrimeEnumerator::new(config.options());

    let start = Instant::now();
    let seq = enumerator.enumerate(config.count)?;
    let elapsed = start.elapsed();
    info!(count = seq.len(), largest = ?seq.largest(), ?elapsed, "primes computed");

    presenter.present_result(&seq, elapsed);

    if let Some(ref path) = config.output {
        write_to_file(path, &seq)
            .with_context(|| format!("cannot write primes to {}", path.display()))?;
    }

    Ok(())
}
