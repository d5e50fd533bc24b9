//! `heft run`: measure every selected framework and write the report.

use heft::Benchmark;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

use crate::cli::RunArgs;
use crate::commands::load_config;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the run command.
///
/// Track failures do not stop the run (unless `--fail-fast`); they are listed
/// after the summary and turn into a non-zero exit.
pub async fn execute(args: RunArgs, config_path: Option<&Path>) -> Result<()> {
    let start = Instant::now();

    let config = load_config(config_path, &args.to_overrides())?;
    debug!(?config, "resolved configuration");

    let benchmark = Benchmark::new(config)?;
    ui::info(&format!(
        "Measuring {} into {}",
        benchmark.registry().ids().join(", "),
        benchmark.output().path().display()
    ));

    let report = benchmark.run().await?;

    ui::print_run_summary(&report.table);

    if let Some(csv_path) = &report.csv_path {
        ui::info(&format!("Wrote {}", csv_path.display()));
    }

    let failures = report.failures();
    if !failures.is_empty() {
        for failure in &failures {
            ui::failure(failure);
        }
        return Err(CliError::TracksFailed {
            count: failures.len(),
        });
    }

    ui::success(&format!(
        "Benchmark completed in {}",
        ui::format_duration(start.elapsed())
    ));
    Ok(())
}
