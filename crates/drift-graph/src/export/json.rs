//! Full-fidelity JSON document of the graph.

use serde::Serialize;

use crate::edge::Edge;
use crate::error::ExportError;
use crate::graph::{Graph, GraphMetadata};
use crate::node::Node;

/// Serializable view of a graph. Nodes and edges keep creation order, so the
/// same input always produces byte-identical output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDocument<'a> {
    pub nodes: &'a [Node],
    pub edges: &'a [Edge],
    #[serde(flatten)]
    pub metadata: &'a GraphMetadata,
}

pub fn export_json(graph: &Graph) -> GraphDocument<'_> {
    GraphDocument {
        nodes: graph.nodes(),
        edges: graph.edges(),
        metadata: graph.metadata(),
    }
}

/// Pretty-printed [`export_json`].
pub fn to_json_string(graph: &Graph) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&export_json(graph))?)
}
