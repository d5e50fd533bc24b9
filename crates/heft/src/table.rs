//! Result aggregation and `stats.csv` serialization.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::measure::SizeReport;
use crate::registry::Framework;

/// Cell value for a track that ran and failed.
pub const FAILED_CELL: &str = "failed";

/// One of the two independent measurement pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    Component,
    Bundle,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::Component, Track::Bundle];

    pub fn as_str(self) -> &'static str {
        match self {
            Track::Component => "component",
            Track::Bundle => "bundle",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Metric {
    Minified,
    Gzip,
    Brotli,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Minified, Metric::Gzip, Metric::Brotli];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Minified => "min",
            Metric::Gzip => "gzip",
            Metric::Brotli => "brotli",
        }
    }

    pub fn value(self, report: &SizeReport) -> u64 {
        match self {
            Metric::Minified => report.minified,
            Metric::Gzip => report.gzip,
            Metric::Brotli => report.brotli,
        }
    }
}

/// What happened to one framework on one track.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TrackOutcome {
    Measured(SizeReport),
    Failed { message: String },
    /// Track disabled, or no project to bundle
    #[default]
    Skipped,
}

impl TrackOutcome {
    pub fn report(&self) -> Option<&SizeReport> {
        match self {
            TrackOutcome::Measured(report) => Some(report),
            _ => None,
        }
    }

    fn cell(&self, metric: Metric) -> String {
        match self {
            TrackOutcome::Measured(report) => metric.value(report).to_string(),
            TrackOutcome::Failed { .. } => FAILED_CELL.to_string(),
            TrackOutcome::Skipped => String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrameworkResult {
    pub component: TrackOutcome,
    pub bundle: TrackOutcome,
}

impl FrameworkResult {
    pub fn track(&self, track: Track) -> &TrackOutcome {
        match track {
            Track::Component => &self.component,
            Track::Bundle => &self.bundle,
        }
    }

    pub fn track_mut(&mut self, track: Track) -> &mut TrackOutcome {
        match track {
            Track::Component => &mut self.component,
            Track::Bundle => &mut self.bundle,
        }
    }
}

/// A labeled failure: which framework, which track, and the error text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameworkFailure {
    pub framework: Framework,
    pub track: Track,
    pub message: String,
}

impl fmt::Display for FrameworkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.framework, self.track, self.message)
    }
}

/// Per-framework outcomes in registry order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultTable {
    rows: IndexMap<Framework, FrameworkResult>,
}

impl ResultTable {
    /// Table with one all-skipped row per framework, fixing column order.
    pub fn new(frameworks: impl IntoIterator<Item = Framework>) -> Self {
        Self {
            rows: frameworks
                .into_iter()
                .map(|fw| (fw, FrameworkResult::default()))
                .collect(),
        }
    }

    pub fn record(&mut self, framework: Framework, track: Track, outcome: TrackOutcome) {
        *self.rows.entry(framework).or_default().track_mut(track) = outcome;
    }

    pub fn get(&self, framework: Framework) -> Option<&FrameworkResult> {
        self.rows.get(&framework)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Framework, &FrameworkResult)> {
        self.rows.iter().map(|(fw, result)| (*fw, result))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every failed track, in table order.
    pub fn failures(&self) -> Vec<FrameworkFailure> {
        let mut failures = Vec::new();
        for (framework, result) in self.iter() {
            for track in Track::ALL {
                if let TrackOutcome::Failed { message } = result.track(track) {
                    failures.push(FrameworkFailure {
                        framework,
                        track,
                        message: message.clone(),
                    });
                }
            }
        }
        failures
    }

    /// Serialize as CSV: a header of framework ids, then one row per
    /// track and metric, e.g. `component (gzip)`.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv = csv::WriterBuilder::new().from_writer(writer);

        let mut header = vec![String::new()];
        header.extend(self.rows.keys().map(|fw| fw.id().to_string()));
        csv.write_record(&header)?;

        for track in Track::ALL {
            for metric in Metric::ALL {
                let mut record = vec![format!("{} ({})", track, metric.label())];
                record.extend(self.rows.values().map(|r| r.track(track).cell(metric)));
                csv.write_record(&record)?;
            }
        }

        csv.flush().map_err(|e| Error::Csv(e.into()))?;
        Ok(())
    }

    pub fn write_csv_file(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path).map_err(|e| Error::output(path, e))?;
        self.write_csv(file)
    }
}
