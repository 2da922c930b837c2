//! Command implementations for the drift CLI.
//!
//! - [`stats`] - node and edge counts
//! - [`query`] - one named query
//! - [`export`] - JSON, DOT or Cytoscape output
//! - [`report`] - every query, computed in parallel
//!
//! Each command loads its configuration, builds the graph once, and provides
//! an `execute` function taking its parsed arguments.

pub mod export;
pub mod query;
pub mod report;
pub mod stats;
pub(crate) mod utils;

pub use export::execute as export_execute;
pub use query::execute as query_execute;
pub use report::execute as report_execute;
pub use stats::execute as stats_execute;
