//! Export command implementation.

use drift_graph::export::export;

use crate::cli::ExportArgs;
use crate::commands::utils;
use crate::config::ConfigOverrides;
use crate::error::Result;
use crate::ui;

/// Execute the export command.
///
/// The format comes from `--format`, then `exportFormat` in the config, then
/// JSON.
pub fn execute(args: ExportArgs) -> Result<()> {
    let overrides = ConfigOverrides {
        export_format: args.format.map(Into::into),
        ..ConfigOverrides::from_input_args(&args.input)
    };
    let config = utils::load_config(&args.input, overrides)?;
    let graph = utils::build_graph(&config)?;

    let text = export(&graph, config.export_format)?;
    utils::write_output(&text, args.out.as_deref())?;

    if let Some(out) = &args.out {
        ui::success(&format!(
            "Wrote {} export to {}",
            config.export_format,
            out.display()
        ));
    }
    Ok(())
}
