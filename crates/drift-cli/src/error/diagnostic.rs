//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use drift_graph::{ConstructionError, Error as GraphError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Graph(e) => graph_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert a drift-graph error to a miette Report
pub fn graph_error_to_miette(err: GraphError) -> Report {
    match err {
        GraphError::Construction(ConstructionError::EdgeEndpointMissing { kind, endpoint, id }) => {
            miette::miette!(
                "Graph construction failed: {} edge {} '{}' is not a known node\n\nHint: The collector output references an entity it never declared",
                kind,
                endpoint,
                id
            )
        }
        GraphError::Construction(ConstructionError::Interrupted { reason }) => {
            miette::miette!(
                "Graph construction interrupted: {}\n\nHint: Raise --deadline-secs or drop it to build without a time limit",
                reason
            )
        }
        other => miette::miette!("{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_graph::{EdgeKind, Endpoint, NodeId, NodeKind};

    #[test]
    fn test_missing_endpoint_report_names_the_node() {
        let err = CliError::from(ConstructionError::EdgeEndpointMissing {
            kind: EdgeKind::HasTest,
            endpoint: Endpoint::Target,
            id: NodeId::new(NodeKind::Test, "Button.test.tsx"),
        });
        let report = cli_error_to_miette(err).to_string();
        assert!(report.contains("HAS_TEST"));
        assert!(report.contains("Test:Button.test.tsx"));
        assert!(report.contains("Hint:"));
    }

    #[test]
    fn test_interrupted_report_mentions_deadline_flag() {
        let err = CliError::from(ConstructionError::Interrupted {
            reason: "construction deadline exceeded".to_string(),
        });
        assert!(cli_error_to_miette(err).to_string().contains("--deadline-secs"));
    }
}
