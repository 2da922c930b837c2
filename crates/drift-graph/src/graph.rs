//! Immutable graph snapshot produced by `build()`.

use std::collections::BTreeSet;
use std::sync::Arc;

use rustc_hash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};

use crate::edge::{Edge, EdgeKind};
use crate::node::{Node, NodeId, NodeKind};

/// Span of history covered by the git collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

/// Facts about the inputs that are not nodes or edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_range: Option<DateRange>,
    /// Deduplicated, sorted package names imported from outside the repo.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub external_packages: BTreeSet<String>,
}

/// Edge indices touching one node, grouped by edge kind.
#[derive(Debug, Clone, Default)]
pub(crate) struct Adjacency {
    pub outgoing: HashMap<EdgeKind, Vec<usize>>,
    pub incoming: HashMap<EdgeKind, Vec<usize>>,
}

#[derive(Debug)]
pub(crate) struct GraphInner {
    /// Nodes in creation order.
    pub nodes: Vec<Node>,
    /// Edges in creation order.
    pub edges: Vec<Edge>,
    pub node_index: HashMap<NodeId, usize>,
    /// Parallel to `nodes`.
    pub adjacency: Vec<Adjacency>,
    pub nodes_by_kind: HashMap<NodeKind, Vec<usize>>,
    pub edges_by_kind: HashMap<EdgeKind, Vec<usize>>,
    pub metadata: GraphMetadata,
}

/// Sealed design-system graph.
///
/// Cloning is cheap (`Arc`), and nothing on this type mutates, so one
/// snapshot can be queried and exported from many threads at once.
#[derive(Debug, Clone)]
pub struct Graph {
    inner: Arc<GraphInner>,
}

impl Graph {
    pub(crate) fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>, metadata: GraphMetadata) -> Self {
        let node_index: HashMap<NodeId, usize> = nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (node.id.clone(), idx))
            .collect();

        let mut adjacency = vec![Adjacency::default(); nodes.len()];
        let mut nodes_by_kind: HashMap<NodeKind, Vec<usize>> = HashMap::default();
        let mut edges_by_kind: HashMap<EdgeKind, Vec<usize>> = HashMap::default();

        for (idx, node) in nodes.iter().enumerate() {
            nodes_by_kind.entry(node.kind).or_default().push(idx);
        }

        for (idx, edge) in edges.iter().enumerate() {
            edges_by_kind.entry(edge.kind).or_default().push(idx);
            // The store validated both endpoints on insert.
            if let Some(&src) = node_index.get(&edge.source) {
                adjacency[src].outgoing.entry(edge.kind).or_default().push(idx);
            }
            if let Some(&dst) = node_index.get(&edge.target) {
                adjacency[dst].incoming.entry(edge.kind).or_default().push(idx);
            }
        }

        Self {
            inner: Arc::new(GraphInner {
                nodes,
                edges,
                node_index,
                adjacency,
                nodes_by_kind,
                edges_by_kind,
                metadata,
            }),
        }
    }

    /// All nodes, in creation order.
    pub fn nodes(&self) -> &[Node] {
        &self.inner.nodes
    }

    /// All edges, in creation order.
    pub fn edges(&self) -> &[Edge] {
        &self.inner.edges
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.inner
            .node_index
            .get(id)
            .map(|&idx| &self.inner.nodes[idx])
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.inner.node_index.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.inner.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.nodes.is_empty()
    }

    pub fn metadata(&self) -> &GraphMetadata {
        &self.inner.metadata
    }

    /// Nodes of one kind, in creation order.
    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &Node> + '_ {
        Self::indexed(self.inner.nodes_by_kind.get(&kind))
            .map(move |idx| &self.inner.nodes[idx])
    }

    /// Edges of one kind, in creation order.
    pub fn edges_of_kind(&self, kind: EdgeKind) -> impl Iterator<Item = &Edge> + '_ {
        Self::indexed(self.inner.edges_by_kind.get(&kind))
            .map(move |idx| &self.inner.edges[idx])
    }

    /// Edges of `kind` leaving `id`.
    pub fn outgoing(&self, id: &NodeId, kind: EdgeKind) -> impl Iterator<Item = &Edge> + '_ {
        let bucket = self
            .adjacency(id)
            .and_then(|adj| adj.outgoing.get(&kind));
        Self::indexed(bucket).map(move |idx| &self.inner.edges[idx])
    }

    /// Edges of `kind` arriving at `id`.
    pub fn incoming(&self, id: &NodeId, kind: EdgeKind) -> impl Iterator<Item = &Edge> + '_ {
        let bucket = self
            .adjacency(id)
            .and_then(|adj| adj.incoming.get(&kind));
        Self::indexed(bucket).map(move |idx| &self.inner.edges[idx])
    }

    pub fn out_degree(&self, id: &NodeId, kind: EdgeKind) -> usize {
        self.adjacency(id)
            .and_then(|adj| adj.outgoing.get(&kind))
            .map_or(0, Vec::len)
    }

    pub fn in_degree(&self, id: &NodeId, kind: EdgeKind) -> usize {
        self.adjacency(id)
            .and_then(|adj| adj.incoming.get(&kind))
            .map_or(0, Vec::len)
    }

    fn adjacency(&self, id: &NodeId) -> Option<&Adjacency> {
        self.inner
            .node_index
            .get(id)
            .map(|&idx| &self.inner.adjacency[idx])
    }

    fn indexed(bucket: Option<&Vec<usize>>) -> impl Iterator<Item = usize> + '_ {
        bucket.into_iter().flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use crate::{EdgeKind, GraphBuilder, NodeKind};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn snapshot_is_shareable_across_threads() {
        assert_send_sync::<super::Graph>();
    }

    #[test]
    fn adjacency_is_grouped_by_kind() {
        let mut builder = GraphBuilder::new();
        let button = builder.add_component("ui/Button", Default::default()).unwrap();
        let primary = builder.add_token("color.primary", Default::default()).unwrap();
        let story = builder.add_story("Button/Primary", Default::default()).unwrap();
        builder.link_token_usage(&button, &primary).unwrap();
        builder.link_story(&button, &story).unwrap();
        let graph = builder.build();

        assert_eq!(graph.out_degree(&button, EdgeKind::UsesToken), 1);
        assert_eq!(graph.out_degree(&button, EdgeKind::HasStory), 1);
        assert_eq!(graph.out_degree(&button, EdgeKind::HasTest), 0);
        assert_eq!(graph.in_degree(&primary, EdgeKind::UsesToken), 1);
        assert_eq!(graph.in_degree(&button, EdgeKind::UsesToken), 0);

        let sources: Vec<_> = graph
            .incoming(&story, EdgeKind::HasStory)
            .map(|e| e.source.clone())
            .collect();
        assert_eq!(sources, vec![button]);
    }

    #[test]
    fn nodes_of_kind_follow_creation_order() {
        let mut builder = GraphBuilder::new();
        builder.add_token("b", Default::default()).unwrap();
        builder.add_component("x", Default::default()).unwrap();
        builder.add_token("a", Default::default()).unwrap();
        let graph = builder.build();

        let keys: Vec<_> = graph
            .nodes_of_kind(NodeKind::Token)
            .map(|n| n.key.as_str())
            .collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn unknown_node_has_no_neighbours() {
        let graph = GraphBuilder::new().build();
        let ghost = crate::NodeId::new(NodeKind::File, "ghost.ts");
        assert_eq!(graph.outgoing(&ghost, EdgeKind::Imports).count(), 0);
        assert_eq!(graph.in_degree(&ghost, EdgeKind::Imports), 0);
        assert!(graph.node(&ghost).is_none());
    }
}
