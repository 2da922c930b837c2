//! Text renderings of query results.
//!
//! Every renderer returns a `String` ending in a newline; callers decide
//! where it goes.

use std::fmt::Write as _;
use std::time::Duration;

use drift_graph::query::{Coverage, GraphStats, RepeatOffender};
use owo_colors::Style;

use super::paint;

/// Format duration in human-readable format.
///
/// ```
/// use std::time::Duration;
/// use drift_cli::ui::format_duration;
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

/// Format a `[0, 1]` ratio as a percentage with one decimal.
///
/// ```
/// use drift_cli::ui::format_ratio;
///
/// assert_eq!(format_ratio(0.5), "50.0%");
/// assert_eq!(format_ratio(1.0 / 3.0), "33.3%");
/// ```
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

fn heading(title: &str) -> String {
    paint(title, Style::new().bold().underline())
}

pub fn render_stats(stats: &GraphStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading("Graph"));
    let _ = writeln!(out, "  nodes: {}", stats.node_count);
    for (kind, count) in &stats.nodes_by_type {
        let _ = writeln!(out, "    {:<12} {}", kind.as_str(), count);
    }
    let _ = writeln!(out, "  edges: {}", stats.edge_count);
    for (kind, count) in &stats.edges_by_type {
        let _ = writeln!(out, "    {:<12} {}", kind.as_str(), count);
    }
    out
}

/// Render a titled list of natural keys, or a "none" line when empty.
pub fn render_keys(title: &str, keys: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", heading(title), keys.len());
    if keys.is_empty() {
        let _ = writeln!(out, "  {}", paint("none", Style::new().dimmed()));
    }
    for key in keys {
        let _ = writeln!(out, "  - {key}");
    }
    out
}

pub fn render_offenders(offenders: &[RepeatOffender]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", heading("Repeat offenders"), offenders.len());
    if offenders.is_empty() {
        let _ = writeln!(out, "  {}", paint("none", Style::new().dimmed()));
    }
    for offender in offenders {
        let count = paint(&offender.drift_count.to_string(), Style::new().yellow().bold());
        let _ = writeln!(out, "  {count:>4}  {}", offender.file);
    }
    out
}

pub fn render_coverage(coverage: &Coverage) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({} components)",
        heading("Coverage"),
        coverage.component_count
    );
    for (label, ratio) in [
        ("tokens", coverage.token_coverage),
        ("tests", coverage.test_coverage),
        ("stories", coverage.story_coverage),
        ("complete", coverage.component_coverage),
    ] {
        let _ = writeln!(out, "  {label:<9} {:>6}", format_ratio(ratio));
    }
    out
}
