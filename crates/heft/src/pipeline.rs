//! The benchmark pipeline.
//!
//! For each framework, strictly in registry order:
//!
//! 1. component track: read → compile → strip imports → measure → persist
//! 2. bundle track: rolldown build → measure → persist
//!
//! A failure ends that framework's track and is recorded in the
//! [`ResultTable`]; the run moves on unless `fail_fast` is set. Preparing the
//! output directory and writing `stats.csv` are not isolated: if either fails
//! the run fails.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::adapter::Compiler;
use crate::bundle::build_bundle;
use crate::config::BenchConfig;
use crate::error::{Error, Result};
use crate::measure::{SizeReport, measure};
use crate::output::OutputDir;
use crate::registry::{FrameworkEntry, Registry};
use crate::strip::strip_imports;
use crate::table::{FrameworkFailure, ResultTable, Track, TrackOutcome};

/// Name of the CSV report inside the output directory.
pub const STATS_FILE: &str = "stats.csv";

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub table: ResultTable,
    /// Path of `stats.csv`, if it was written
    pub csv_path: Option<PathBuf>,
}

impl RunReport {
    pub fn failures(&self) -> Vec<FrameworkFailure> {
        self.table.failures()
    }

    pub fn is_success(&self) -> bool {
        self.failures().is_empty()
    }
}

/// One benchmark run over a resolved registry.
#[derive(Debug)]
pub struct Benchmark {
    config: BenchConfig,
    registry: Registry,
    compiler: Arc<Compiler>,
    output: OutputDir,
}

impl Benchmark {
    pub fn new(config: BenchConfig) -> Result<Self> {
        let registry = Registry::from_config(&config)?;
        Ok(Self::with_registry(config, registry))
    }

    /// Run over explicit registry rows instead of the configured selection.
    pub fn with_registry(config: BenchConfig, registry: Registry) -> Self {
        let compiler = Arc::new(Compiler::new(config.js_runtime));
        let output = OutputDir::new(config.out_dir());
        Self {
            config,
            registry,
            compiler,
            output,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn output(&self) -> &OutputDir {
        &self.output
    }

    pub async fn run(&self) -> Result<RunReport> {
        self.output.prepare()?;

        let mut table = ResultTable::new(self.registry.iter().map(|e| e.framework));

        for entry in self.registry.iter() {
            if self.config.component {
                let outcome = self.component_track(entry).await;
                self.record(&mut table, entry, Track::Component, outcome)?;
            }
            if self.config.bundle {
                let outcome = self.bundle_track(entry).await;
                self.record(&mut table, entry, Track::Bundle, outcome)?;
            }
        }

        let csv_path = if self.config.csv {
            let path = self.output.path().join(STATS_FILE);
            table.write_csv_file(&path)?;
            debug!(path = %path.display(), "wrote stats");
            Some(path)
        } else {
            None
        };

        Ok(RunReport { table, csv_path })
    }

    fn record(
        &self,
        table: &mut ResultTable,
        entry: &FrameworkEntry,
        track: Track,
        outcome: Result<Option<SizeReport>>,
    ) -> Result<()> {
        let outcome = match outcome {
            Ok(Some(report)) => {
                info!(
                    framework = entry.id(),
                    track = %track,
                    minified = report.minified,
                    gzip = report.gzip,
                    brotli = report.brotli,
                    "measured"
                );
                TrackOutcome::Measured(report)
            }
            Ok(None) => {
                debug!(framework = entry.id(), track = %track, "skipped");
                TrackOutcome::Skipped
            }
            Err(err) if self.config.fail_fast => return Err(err),
            Err(err) => {
                warn!(framework = entry.id(), track = %track, error = %err, "failed");
                TrackOutcome::Failed {
                    message: err.to_string(),
                }
            }
        };
        table.record(entry.framework, track, outcome);
        Ok(())
    }

    async fn component_track(&self, entry: &FrameworkEntry) -> Result<Option<SizeReport>> {
        let source = tokio::fs::read_to_string(&entry.source_path)
            .await
            .map_err(|source| Error::SourceRead {
                framework: entry.id().to_string(),
                path: entry.source_path.clone(),
                source,
            })?;

        let cwd = compile_cwd(entry);
        let generated = self
            .compiler
            .compile(entry.framework, &entry.source_path, &source, &cwd)
            .await?;
        let stripped = strip_imports(&generated);

        self.measure_and_persist(entry.id(), &stripped).map(Some)
    }

    async fn bundle_track(&self, entry: &FrameworkEntry) -> Result<Option<SizeReport>> {
        let Some(code) = build_bundle(entry, Arc::clone(&self.compiler)).await? else {
            return Ok(None);
        };
        let name = format!("{}.bundle", entry.id());
        self.measure_and_persist(&name, &code).map(Some)
    }

    fn measure_and_persist(&self, name: &str, code: &str) -> Result<SizeReport> {
        let measurement = measure(name, code)?;
        if self.config.persist {
            self.output.write_artifacts(name, code, &measurement)?;
        }
        Ok(measurement.report)
    }
}

/// Directory the JS runtime resolves compilers from: the project root when
/// there is one, else the directory holding the source file.
fn compile_cwd(entry: &FrameworkEntry) -> PathBuf {
    entry
        .project_root
        .clone()
        .filter(|root| root.is_dir())
        .or_else(|| entry.source_path.parent().map(Path::to_path_buf))
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from("."))
}
