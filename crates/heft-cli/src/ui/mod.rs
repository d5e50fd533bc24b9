//! Terminal output: status messages and the size summary.
//!
//! Everything here writes to stderr so stdout stays clean for `heft list`.

mod format;

use heft::FrameworkFailure;
use owo_colors::OwoColorize;

pub use format::{format_duration, format_size, print_run_summary, summary_lines};

pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

pub fn info(message: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning, e.g. component sources that `heft list` could not find.
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print one failed track as `✗ <framework> (<track>): <message>`.
///
/// ```no_run
/// use heft::{Framework, FrameworkFailure, Track};
/// use heft_cli::ui::failure;
///
/// failure(&FrameworkFailure {
///     framework: Framework::Vue,
///     track: Track::Bundle,
///     message: "no JavaScript output".to_string(),
/// });
/// ```
pub fn failure(failure: &FrameworkFailure) {
    eprintln!("{} {}", "✗".red().bold(), failure_label(failure).red());
}

fn failure_label(failure: &FrameworkFailure) -> String {
    // First line only; the pipeline logs the full error.
    let message = failure.message.lines().next().unwrap_or_default();
    format!("{} ({}): {}", failure.framework, failure.track, message)
}

/// Check if color output should be enabled.
///
/// `NO_COLOR` wins over `FORCE_COLOR`; otherwise colors are used when stderr
/// is attended by a user.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::user_attended_stderr()
}
