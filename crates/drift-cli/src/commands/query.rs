//! Query command implementation.

use drift_graph::{QueryKind, QueryOutput, query::run_query};

use crate::cli::QueryArgs;
use crate::commands::utils;
use crate::config::ConfigOverrides;
use crate::error::Result;
use crate::ui;

/// Execute the query command.
///
/// `--min-drift-count` only affects `repeat-offenders`; it falls back to the
/// configured `minDriftCount`.
pub fn execute(args: QueryArgs) -> Result<()> {
    let overrides = ConfigOverrides {
        min_drift_count: args.min_drift_count,
        ..ConfigOverrides::from_input_args(&args.input)
    };
    let config = utils::load_config(&args.input, overrides)?;
    let graph = utils::build_graph(&config)?;

    let kind = args.kind.to_query_kind(config.min_drift_count);
    let output = run_query(&graph, kind);

    utils::emit(config.output, &output, || render(kind, &output))
}

/// Text rendering of one query result.
pub fn render(kind: QueryKind, output: &QueryOutput) -> String {
    match output {
        QueryOutput::Stats(stats) => ui::render_stats(stats),
        QueryOutput::Keys(keys) => ui::render_keys(title(kind), keys),
        QueryOutput::Offenders(offenders) => ui::render_offenders(offenders),
        QueryOutput::Coverage(coverage) => ui::render_coverage(coverage),
    }
}

fn title(kind: QueryKind) -> &'static str {
    match kind {
        QueryKind::UnusedTokens => "Unused tokens",
        QueryKind::UntestedComponents => "Untested components",
        QueryKind::UndocumentedComponents => "Undocumented components",
        QueryKind::Stats | QueryKind::RepeatOffenders { .. } | QueryKind::Coverage => kind.name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_uses_readable_titles() {
        let text = render(
            QueryKind::UntestedComponents,
            &QueryOutput::Keys(vec!["Card".to_string()]),
        );
        assert!(text.contains("Untested components"));
        assert!(text.contains("- Card"));
    }
}
