//! PrimeCalc-rs: first-N prime number calculator.

use std::process::ExitCode;

use primecalc_lib::{app, config, errors};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(config.log_level().into())
                .from_env_lossy(),
        )
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            errors::report(&err, config.lang);
            ExitCode::from(u8::try_from(errors::exit_code_for(&err)).unwrap_or(1))
        }
    }
}
