//! Error reporting and exit codes.

use primecalc_cli::{ui, Language};
use primecalc_core::constants::exit_codes;
use primecalc_core::PrimeError;

/// Map an application error to the process exit code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PrimeError>() {
        Some(PrimeError::NonPositiveCount(_)) => exit_codes::ERROR_INVALID_COUNT,
        Some(PrimeError::LimitExceeded { .. }) => exit_codes::ERROR_LIMIT_EXCEEDED,
        Some(PrimeError::Config(_)) => exit_codes::ERROR_CONFIG,
        None => exit_codes::ERROR_GENERIC,
    }
}

/// Localized `(prefix, message)` pair for an application error.
pub fn describe(err: &anyhow::Error, lang: Language) -> (&'static str, String) {
    match err.downcast_ref::<PrimeError>() {
        Some(prime_err) => (lang.error_prefix(), lang.describe(prime_err)),
        None => (lang.unexpected_prefix(), format!("{err:#}")),
    }
}

/// Print an application error to stderr.
pub fn report(err: &anyhow::Error, lang: Language) {
    tracing::debug!(error = ?err, "run failed");
    let (prefix, message) = describe(err, lang);
    ui::print_error(prefix, &message);
}
