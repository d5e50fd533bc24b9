//! Command implementations.
//!
//! - [`run`] - measure and report
//! - [`list`] - print the resolved registry
//!
//! Each command provides an `execute` function taking its parsed arguments
//! and the global `--config` path.

pub mod list;
pub mod run;

use heft::{BenchConfig, ConfigOverrides};
use std::path::Path;

use crate::error::{CliError, Result};

pub use list::execute as list_execute;
pub use run::execute as run_execute;

/// Load configuration (CLI > `HEFT_*` env > config file > defaults) and make
/// sure the benchmark root exists.
pub(crate) fn load_config(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<BenchConfig> {
    if let Some(path) = config_path.filter(|p| !p.is_file()) {
        return Err(CliError::InvalidArgument(format!(
            "config file not found: {}",
            path.display()
        )));
    }

    let config = BenchConfig::load(config_path, overrides)?;
    if !config.root.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "benchmark root is not a directory: {}",
            config.root.display()
        )));
    }
    Ok(config)
}
