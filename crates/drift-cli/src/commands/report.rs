//! Report command implementation.
//!
//! Every query runs against the same immutable graph, so they are computed in
//! parallel with rayon.

use std::fmt::Write as _;

use drift_graph::Graph;
use drift_graph::query::{
    Coverage, GraphStats, RepeatOffender, calculate_coverage, find_repeat_offenders,
    find_undocumented_components, find_untested_components, find_unused_tokens, graph_stats,
};
use serde::Serialize;

use crate::cli::ReportArgs;
use crate::commands::utils;
use crate::config::ConfigOverrides;
use crate::error::Result;
use crate::ui;

/// Results of every query over one graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub stats: GraphStats,
    pub unused_tokens: Vec<String>,
    pub untested_components: Vec<String>,
    pub undocumented_components: Vec<String>,
    pub repeat_offenders: Vec<RepeatOffender>,
    pub coverage: Coverage,
}

impl Report {
    /// Run every query against `graph`.
    pub fn collect(graph: &Graph, min_drift_count: usize) -> Self {
        let (
            (stats, coverage),
            ((unused_tokens, untested_components), (undocumented_components, repeat_offenders)),
        ) = rayon::join(
            || rayon::join(|| graph_stats(graph), || calculate_coverage(graph)),
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || find_unused_tokens(graph),
                            || find_untested_components(graph),
                        )
                    },
                    || {
                        rayon::join(
                            || find_undocumented_components(graph),
                            || find_repeat_offenders(graph, min_drift_count),
                        )
                    },
                )
            },
        );

        Self {
            stats,
            unused_tokens,
            untested_components,
            undocumented_components,
            repeat_offenders,
            coverage,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for section in [
            ui::render_stats(&self.stats),
            ui::render_coverage(&self.coverage),
            ui::render_keys("Unused tokens", &self.unused_tokens),
            ui::render_keys("Untested components", &self.untested_components),
            ui::render_keys("Undocumented components", &self.undocumented_components),
            ui::render_offenders(&self.repeat_offenders),
        ] {
            let _ = writeln!(out, "{section}");
        }
        out
    }
}

/// Execute the report command.
pub fn execute(args: ReportArgs) -> Result<()> {
    let overrides = ConfigOverrides {
        min_drift_count: args.min_drift_count,
        ..ConfigOverrides::from_input_args(&args.input)
    };
    let config = utils::load_config(&args.input, overrides)?;
    let graph = utils::build_graph(&config)?;

    let report = Report::collect(&graph, config.min_drift_count);
    utils::emit(config.output, &report, || report.render())
}
