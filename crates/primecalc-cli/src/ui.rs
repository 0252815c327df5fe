//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Whether stdout should receive ANSI styling.
#[must_use]
pub fn colors_wanted() -> bool {
    !is_color_disabled() && console::colors_enabled()
}

/// Render a header line, bold cyan when `color` is set.
#[must_use]
pub fn header(text: &str, color: bool) -> String {
    if color {
        style(text).bold().cyan().to_string()
    } else {
        text.to_string()
    }
}

/// Render a summary line, green when `color` is set.
#[must_use]
pub fn highlight(text: &str, color: bool) -> String {
    if color {
        style(text).green().to_string()
    } else {
        text.to_string()
    }
}

/// Print an error message to stderr.
pub fn print_error(prefix: &str, text: &str) {
    if is_color_disabled() || !console::colors_enabled_stderr() {
        eprintln!("{prefix} {text}");
    } else {
        eprintln!("{} {text}", style(prefix).red().bold());
    }
}
