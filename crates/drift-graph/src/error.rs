//! Error types for graph construction, query dispatch, and export.

use thiserror::Error;

use crate::edge::EdgeKind;
use crate::node::{NodeId, NodeKind};

/// Which side of an edge failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Failures while feeding the builder.
///
/// Every variant is fatal for the current build: a graph with a dropped edge
/// would make every downstream query silently wrong.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstructionError {
    /// An edge referenced a node that was never added. Nodes must be added
    /// before the edges that point at them.
    #[error("{kind} edge {endpoint} '{id}' is not a known node")]
    EdgeEndpointMissing {
        kind: EdgeKind,
        endpoint: Endpoint,
        id: NodeId,
    },

    /// A node was described without an identifying key.
    #[error("{kind} node requires a non-empty natural key")]
    EmptyNaturalKey { kind: NodeKind },

    /// The construction deadline passed or the cancellation flag was raised.
    #[error("graph construction interrupted: {reason}")]
    Interrupted { reason: String },
}

/// Failures resolving a query name at the command boundary.
///
/// Query functions themselves never fail; a partial graph yields empty lists
/// and zero ratios.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown query '{0}' (expected one of: {known})", known = crate::query::QueryKind::NAMES.join(", "))]
    UnknownQuery(String),
}

/// Failures producing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The caller asked for a format that does not exist.
    #[error("unsupported export format '{0}' (expected json, dot or cytoscape)")]
    UnsupportedFormat(String),

    #[error("failed to serialize graph: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Error types for drift-graph operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Result type alias for drift-graph operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_missing_message_names_the_edge_and_side() {
        let err = ConstructionError::EdgeEndpointMissing {
            kind: EdgeKind::Changed,
            endpoint: Endpoint::Target,
            id: NodeId::new(NodeKind::File, "src/Button.tsx"),
        };
        let msg = err.to_string();
        assert!(msg.contains("CHANGED"));
        assert!(msg.contains("target"));
        assert!(msg.contains("File:src/Button.tsx"));
    }

    #[test]
    fn unknown_query_lists_known_names() {
        let msg = QueryError::UnknownQuery("unused".to_string()).to_string();
        assert!(msg.contains("'unused'"));
        assert!(msg.contains("unused-tokens"));
        assert!(msg.contains("repeat-offenders"));
    }

    #[test]
    fn crate_error_wraps_construction_error() {
        let err: Error = ConstructionError::EmptyNaturalKey {
            kind: NodeKind::Token,
        }
        .into();
        assert!(matches!(err, Error::Construction(_)));
        assert_eq!(err.to_string(), "Token node requires a non-empty natural key");
    }
}
