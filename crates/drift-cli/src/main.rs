//! Drift CLI entry point: parses arguments, initializes logging and colors,
//! and dispatches to the selected command.

use clap::Parser;
use drift_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let no_color = args.no_color || !logger::should_use_colors();
    logger::init_logger(args.verbose, args.quiet, no_color);
    ui::init_colors(no_color);

    let result = match args.command {
        cli::Command::Stats(stats_args) => commands::stats_execute(stats_args),
        cli::Command::Query(query_args) => commands::query_execute(query_args),
        cli::Command::Export(export_args) => commands::export_execute(export_args),
        cli::Command::Report(report_args) => commands::report_execute(report_args),
    };

    result.map_err(error::cli_error_to_miette)
}
