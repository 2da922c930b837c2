//! Command-line interface definition for drift.
//!
//! # Command Structure
//!
//! - `drift stats` - node and edge counts by type
//! - `drift query <kind>` - one named query
//! - `drift export` - serialize the graph (json, dot, cytoscape)
//! - `drift report` - every query at once

mod commands;
pub mod enums;
mod validation;

use clap::Parser;

pub use commands::{Command, ExportArgs, InputArgs, QueryArgs, ReportArgs, StatsArgs};
pub use enums::*;
pub use validation::parse_min_drift_count;

/// Drift - design-system drift graph
#[derive(Parser, Debug)]
#[command(
    name = "drift",
    version,
    about = "Build, query and export a design-system drift graph",
    long_about = "Drift merges git history, component/token usage scans and import graphs\n\
                  into one typed graph, then answers questions about it: unused tokens,\n\
                  untested components, repeat drift offenders and coverage."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
