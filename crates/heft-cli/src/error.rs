//! Error handling for the Heft CLI.
//!
//! Library errors keep their [`miette::Diagnostic`] codes and help text all
//! the way to the terminal; CLI-only failures are plain messages.

use miette::Report;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Errors from the benchmark library
    #[error(transparent)]
    Heft(#[from] heft::Error),

    /// I/O errors outside the library (terminal, working directory)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The run completed but some framework tracks failed
    #[error("{count} framework track(s) failed")]
    TracksFailed { count: usize },
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Convert a [`CliError`] into a miette report.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Heft(e) => Report::new(e),
        CliError::TracksFailed { count } => miette::miette!(
            help = "See the failures listed above; the CSV marks them as `failed`",
            "{} framework track(s) failed",
            count
        ),
        _ => miette::miette!("{}", err),
    }
}
