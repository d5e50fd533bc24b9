//! Formatting utilities for sizes, durations, and the run summary.

use console::Term;
use heft::{ResultTable, Track, TrackOutcome};
use owo_colors::OwoColorize;
use std::time::Duration;

/// Format file size in human-readable format.
///
/// ```
/// use heft_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// assert_eq!(format_size(1_048_576), "1.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Format duration in human-readable format.
///
/// ```
/// use std::time::Duration;
/// use heft_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// One uncolored summary line per framework and track that ran.
pub fn summary_lines(table: &ResultTable) -> Vec<(String, &TrackOutcome)> {
    let mut lines = Vec::new();
    for (framework, result) in table.iter() {
        for track in Track::ALL {
            let outcome = result.track(track);
            let detail = match outcome {
                TrackOutcome::Measured(size) => format!(
                    "{:>10} min  {:>10} gzip  {:>10} brotli",
                    format_size(size.minified),
                    format_size(size.gzip),
                    format_size(size.brotli)
                ),
                TrackOutcome::Failed { .. } => "failed".to_string(),
                TrackOutcome::Skipped => continue,
            };
            lines.push((format!("{:<8} {:<10} {}", framework.id(), track, detail), outcome));
        }
    }
    lines
}

/// Print the size summary table to stderr.
pub fn print_run_summary(table: &ResultTable) {
    let width = Term::stderr().size().1 as usize;

    eprintln!("\n{}", "Size Summary".bold().underline());
    eprintln!("{}", "─".repeat(width.min(80)));

    for (line, outcome) in summary_lines(table) {
        match outcome {
            TrackOutcome::Failed { .. } => eprintln!("  {} {}", "▸".red(), line.red()),
            _ => eprintln!("  {} {}", "▸".blue(), line.bright_white()),
        }
    }

    eprintln!("{}", "─".repeat(width.min(80)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use heft::{Framework, SizeReport};

    #[test]
    fn test_format_size_boundaries() {
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.50 KB");
    }

    #[test]
    fn test_summary_lines_skip_unrun_tracks() {
        let mut table = ResultTable::new([Framework::Preact, Framework::Vue]);
        table.record(
            Framework::Preact,
            Track::Component,
            TrackOutcome::Measured(SizeReport {
                minified: 2048,
                gzip: 900,
                brotli: 800,
            }),
        );
        table.record(
            Framework::Vue,
            Track::Bundle,
            TrackOutcome::Failed {
                message: "no entry".to_string(),
            },
        );

        let lines: Vec<String> = summary_lines(&table).into_iter().map(|(l, _)| l).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "preact   component     2.00 KB min       900 B gzip       800 B brotli"
        );
        assert_eq!(lines[1], "vue      bundle     failed");
    }
}
