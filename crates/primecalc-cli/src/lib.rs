//! # primecalc-cli
//!
//! Localized table output, result presentation, and shell completion.

pub mod completion;
pub mod locale;
pub mod output;
pub mod presenter;
pub mod ui;

pub use locale::Language;
pub use output::OutputFormat;
pub use presenter::{CLIResultPresenter, ResultPresenter};
