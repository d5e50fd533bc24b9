//! Logging setup for the Heft CLI.
//!
//! The library emits `tracing` events (one `info` line per measured track);
//! this module decides which of them reach the terminal.
//!
//! # Example
//!
//! ```rust,no_run
//! use heft_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::info!(framework = "preact", "measured");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "heft=debug,heft_cli=debug";
const QUIET_FILTER: &str = "heft=error,heft_cli=error";
const DEFAULT_FILTER: &str = "heft=info,heft_cli=info";

/// Filter for the given flags.
///
/// Priority: `--verbose`, then `--quiet`, then `RUST_LOG`, then info level for
/// heft crates.
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr) // stdout is reserved for command output
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_parse() {
        // Directive strings must be valid; EnvFilter::new silently drops bad ones
        for directives in [VERBOSE_FILTER, QUIET_FILTER, DEFAULT_FILTER] {
            assert!(EnvFilter::try_new(directives).is_ok(), "{directives}");
        }
    }

    #[test]
    fn test_verbose_wins() {
        let filter = build_filter(true, true);
        assert!(filter.to_string().contains("heft=debug"));
    }

    #[test]
    fn test_quiet_filter() {
        let filter = build_filter(false, true);
        assert!(filter.to_string().contains("heft=error"));
    }
}
