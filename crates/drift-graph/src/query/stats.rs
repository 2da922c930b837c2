//! Graph-wide counts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::edge::EdgeKind;
use crate::graph::Graph;
use crate::node::NodeKind;

/// Node and edge totals, overall and per kind.
///
/// Kinds with no members are omitted from the grouped maps.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes_by_type: BTreeMap<NodeKind, usize>,
    pub edges_by_type: BTreeMap<EdgeKind, usize>,
}

impl GraphStats {
    /// Count for one node kind, zero when absent.
    pub fn nodes_of(&self, kind: NodeKind) -> usize {
        self.nodes_by_type.get(&kind).copied().unwrap_or(0)
    }

    /// Count for one edge kind, zero when absent.
    pub fn edges_of(&self, kind: EdgeKind) -> usize {
        self.edges_by_type.get(&kind).copied().unwrap_or(0)
    }
}

/// Compute statistics snapshot for dashboards.
pub fn graph_stats(graph: &Graph) -> GraphStats {
    let nodes_by_type = NodeKind::ALL
        .into_iter()
        .map(|kind| (kind, graph.nodes_of_kind(kind).count()))
        .filter(|(_, count)| *count > 0)
        .collect();
    let edges_by_type = EdgeKind::ALL
        .into_iter()
        .map(|kind| (kind, graph.edges_of_kind(kind).count()))
        .filter(|(_, count)| *count > 0)
        .collect();

    GraphStats {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        nodes_by_type,
        edges_by_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphBuilder;
    use chrono::{TimeZone, Utc};

    #[test]
    fn empty_graph_has_zero_counts() {
        let stats = graph_stats(&GraphBuilder::new().build());
        assert_eq!(stats, GraphStats::default());
        assert_eq!(stats.nodes_of(NodeKind::Commit), 0);
    }

    #[test]
    fn five_commits_by_two_developers() {
        let mut builder = GraphBuilder::new();
        let emails = ["ada@example.com", "grace@example.com"];
        for (i, sha) in ["c5", "c1", "c3", "c2", "c4"].iter().enumerate() {
            let email = emails[i % 2];
            let at = Utc.with_ymd_and_hms(2024, 1, (i + 1) as u32, 0, 0, 0).unwrap();
            let dev = builder.add_developer(email, email, email, None, 0).unwrap();
            let commit = builder.add_commit(sha, "msg", email, email, at).unwrap();
            builder.link_authored(&dev, &commit, at).unwrap();
        }
        let stats = graph_stats(&builder.build());

        assert_eq!(stats.nodes_of(NodeKind::Commit), 5);
        assert_eq!(stats.nodes_of(NodeKind::Developer), 2);
        assert_eq!(stats.edges_of(EdgeKind::Authored), 5);
        assert_eq!(stats.node_count, 7);
        assert_eq!(stats.edge_count, 5);
    }

    #[test]
    fn grouped_counts_serialize_with_type_tags() {
        let mut builder = GraphBuilder::new();
        builder.add_token("t", Default::default()).unwrap();
        let json = serde_json::to_value(graph_stats(&builder.build())).unwrap();
        assert_eq!(json["nodesByType"]["Token"], 1);
        assert_eq!(json["nodeCount"], 1);
    }
}
