//! Stats command implementation.

use drift_graph::query::graph_stats;

use crate::cli::StatsArgs;
use crate::commands::utils;
use crate::config::ConfigOverrides;
use crate::error::Result;
use crate::ui;

/// Execute the stats command.
pub fn execute(args: StatsArgs) -> Result<()> {
    let config = utils::load_config(&args.input, ConfigOverrides::from_input_args(&args.input))?;
    let graph = utils::build_graph(&config)?;
    let stats = graph_stats(&graph);

    utils::emit(config.output, &stats, || ui::render_stats(&stats))
}
