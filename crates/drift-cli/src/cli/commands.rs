use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;
use crate::cli::validation::parse_min_drift_count;

/// Available drift subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show node and edge counts by type
    Stats(StatsArgs),

    /// Run one query against the graph
    ///
    /// Lists unused tokens, untested or undocumented components, files that
    /// keep drifting, or coverage ratios.
    Query(QueryArgs),

    /// Export the graph for other tools
    ///
    /// JSON keeps every attribute, DOT renders with Graphviz, and Cytoscape
    /// elements load straight into Cytoscape.js.
    Export(ExportArgs),

    /// Run every query and print one combined report
    Report(ReportArgs),
}

/// Collector inputs and output options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Git history collector output (JSON)
    #[arg(long, value_name = "FILE")]
    pub history: Option<PathBuf>,

    /// Component/token usage scanner output (JSON)
    #[arg(long, value_name = "FILE")]
    pub usage: Option<PathBuf>,

    /// Import graph collector output (JSON)
    #[arg(long, value_name = "FILE")]
    pub imports: Option<PathBuf>,

    /// Path to drift.config.json or drift.config.toml
    ///
    /// If not provided, searches the current directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Abort graph construction after this many seconds
    #[arg(long, value_name = "SECS")]
    pub deadline_secs: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Query to run
    #[arg(value_enum, value_name = "KIND")]
    pub kind: QueryName,

    /// Minimum drift events for a file to count as a repeat offender
    #[arg(long, value_name = "N", value_parser = parse_min_drift_count)]
    pub min_drift_count: Option<usize>,

    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormatArg>,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Minimum drift events for a file to count as a repeat offender
    #[arg(long, value_name = "N", value_parser = parse_min_drift_count)]
    pub min_drift_count: Option<usize>,

    #[command(flatten)]
    pub input: InputArgs,
}
