//! Cytoscape.js element collection.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::attributes::Attributes;
use crate::graph::Graph;

/// One Cytoscape element: everything lives under `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CytoscapeElement {
    pub data: Map<String, Value>,
}

/// `{ nodes: [...], edges: [...] }`, the layout Cytoscape accepts as
/// `elements`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CytoscapeElements {
    pub nodes: Vec<CytoscapeElement>,
    pub edges: Vec<CytoscapeElement>,
}

/// Reserved keys take precedence over attributes of the same name.
/// `data` keys serialize in sorted order.
fn element(reserved: [(&str, Value); 4], attributes: &Attributes) -> CytoscapeElement {
    let mut data = Map::new();
    for (key, value) in reserved {
        data.insert(key.to_string(), value);
    }
    for (key, value) in attributes {
        if !data.contains_key(key) {
            data.insert(key.clone(), value.clone());
        }
    }
    CytoscapeElement { data }
}

pub fn export_cytoscape(graph: &Graph) -> CytoscapeElements {
    let nodes = graph
        .nodes()
        .iter()
        .map(|node| {
            element(
                [
                    ("id", json!(node.id)),
                    ("label", json!(node.key)),
                    ("type", json!(node.kind)),
                    ("key", json!(node.key)),
                ],
                &node.attributes,
            )
        })
        .collect();

    let edges = graph
        .edges()
        .iter()
        .map(|edge| {
            element(
                [
                    ("id", json!(edge.id)),
                    ("source", json!(edge.source)),
                    ("target", json!(edge.target)),
                    ("type", json!(edge.kind)),
                ],
                &edge.attributes,
            )
        })
        .collect();

    CytoscapeElements { nodes, edges }
}
