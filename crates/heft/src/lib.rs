#![cfg_attr(docsrs, feature(doc_cfg))]

//! # heft
//!
//! Compiled-output size benchmarks for UI component frameworks.
//!
//! heft compiles an equivalent component in each framework with that
//! framework's own compiler, strips the shared runtime imports, minifies the
//! result with oxc, and records minified, gzip and brotli byte counts. A
//! second track builds each framework's example app with rolldown and
//! measures the emitted bundle the same way.
//!
//! ## Quick Start
//!
//! ```no_run
//! use heft::{BenchConfig, Benchmark, ConfigOverrides};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BenchConfig::load(None, &ConfigOverrides::default())?;
//! let report = Benchmark::new(config)?.run().await?;
//!
//! for (framework, result) in report.table.iter() {
//!     if let Some(size) = result.component.report() {
//!         println!("{framework}: {} bytes gzipped", size.gzip);
//!     }
//! }
//! # Ok(()) }
//! ```
//!
//! ## Modules
//!
//! - [`registry`]: the closed set of frameworks and their fixture paths
//! - [`adapter`]: per-framework compilation (oxc in process, or a JS runtime)
//! - [`strip`]: import removal from generated code
//! - [`measure`]: minify + compress, byte counts
//! - [`bundle`]: rolldown build of an example app
//! - [`table`]: per-framework outcomes and `stats.csv`
//! - [`pipeline`]: the run itself

pub mod adapter;
pub mod bundle;
pub mod config;
pub mod error;
pub mod measure;
pub mod output;
pub mod pipeline;
pub mod registry;
pub mod strip;
pub mod table;

pub use adapter::{Adapter, Compiler, JsRuntime};
pub use config::{BenchConfig, CONFIG_FILE, ConfigOverrides, PathOverride};
pub use error::{CompilerError, Error, Result};
pub use measure::{Measurement, SizeReport, measure};
pub use output::OutputDir;
pub use pipeline::{Benchmark, RunReport, STATS_FILE};
pub use registry::{Framework, FrameworkEntry, Registry};
pub use strip::strip_imports;
pub use table::{FrameworkFailure, FrameworkResult, Metric, ResultTable, Track, TrackOutcome};
