//! Typed construction façade over [`GraphStore`].
//!
//! Each constructor picks the node kind and natural key for the caller, so
//! collectors never hand-assemble ids.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::attributes::{Attributes, CREATED_AT, attributes};
use crate::edge::{EdgeId, EdgeKind};
use crate::error::ConstructionError;
use crate::graph::{DateRange, Graph};
use crate::interrupt::Interrupt;
use crate::node::{NodeId, NodeKind, normalize_path};
use crate::store::GraphStore;

/// How serious an observed drift event is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriftSeverity {
    Info,
    Warning,
    Critical,
}

impl DriftSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

fn rfc3339(at: &DateTime<Utc>) -> Value {
    Value::String(at.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Builds a [`Graph`] from collector output.
///
/// Add nodes before the edges that reference them; an edge to an unknown
/// node is a [`ConstructionError`].
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use drift_graph::{GraphBuilder, query};
///
/// # fn main() -> Result<(), drift_graph::ConstructionError> {
/// let mut builder = GraphBuilder::new();
/// let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
/// let dev = builder.add_developer("ada", "Ada", "ada@example.com", None, 1)?;
/// let commit = builder.add_commit("abc123", "Add button", "Ada", "ada@example.com", at)?;
/// let file = builder.add_file("src/Button.tsx", None)?;
/// builder.link_authored(&dev, &commit, at)?;
/// builder.link_changed(&commit, &file, at)?;
///
/// let graph = builder.build();
/// assert_eq!(query::graph_stats(&graph).node_count, 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    store: GraphStore,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder whose every insert first checks `interrupt`.
    pub fn with_interrupt(interrupt: Interrupt) -> Self {
        Self {
            store: GraphStore::with_interrupt(interrupt),
        }
    }

    pub fn add_commit(
        &mut self,
        sha: &str,
        message: &str,
        author: &str,
        author_email: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<NodeId, ConstructionError> {
        self.store.add_node(
            NodeKind::Commit,
            sha.trim(),
            attributes([
                ("sha", json!(sha.trim())),
                ("message", json!(message)),
                ("author", json!(author)),
                ("authorEmail", json!(author_email)),
                ("timestamp", rfc3339(&timestamp)),
            ]),
        )
    }

    /// Add a file keyed by its normalized path.
    ///
    /// `display_path` defaults to the path as given.
    pub fn add_file(
        &mut self,
        path: &str,
        display_path: Option<&str>,
    ) -> Result<NodeId, ConstructionError> {
        let normalized = normalize_path(path);
        self.store.add_node(
            NodeKind::File,
            &normalized,
            attributes([
                ("path", json!(normalized)),
                ("displayPath", json!(display_path.unwrap_or(path))),
            ]),
        )
    }

    /// Add or update a developer.
    ///
    /// `commit_count` replaces any previous value; aggregate before calling.
    pub fn add_developer(
        &mut self,
        id: &str,
        name: &str,
        email: &str,
        avatar_url: Option<&str>,
        commit_count: u64,
    ) -> Result<NodeId, ConstructionError> {
        self.store.add_node(
            NodeKind::Developer,
            id.trim(),
            attributes([
                ("name", json!(name)),
                ("email", json!(email)),
                ("avatarUrl", json!(avatar_url)),
                ("commitCount", json!(commit_count)),
            ]),
        )
    }

    pub fn add_component(
        &mut self,
        qualified_name: &str,
        attrs: Attributes,
    ) -> Result<NodeId, ConstructionError> {
        self.store
            .add_node(NodeKind::Component, qualified_name.trim(), attrs)
    }

    pub fn add_token(&mut self, name: &str, attrs: Attributes) -> Result<NodeId, ConstructionError> {
        self.store.add_node(NodeKind::Token, name.trim(), attrs)
    }

    pub fn add_story(&mut self, id: &str, attrs: Attributes) -> Result<NodeId, ConstructionError> {
        self.store.add_node(NodeKind::Story, id.trim(), attrs)
    }

    pub fn add_test(&mut self, id: &str, attrs: Attributes) -> Result<NodeId, ConstructionError> {
        self.store.add_node(NodeKind::Test, id.trim(), attrs)
    }

    /// Untyped edge insert, validated by the store.
    pub fn add_edge(
        &mut self,
        kind: EdgeKind,
        source: &NodeId,
        target: &NodeId,
        attrs: Attributes,
    ) -> Result<EdgeId, ConstructionError> {
        self.store.add_edge(kind, source, target, attrs)
    }

    pub fn link_authored(
        &mut self,
        developer: &NodeId,
        commit: &NodeId,
        at: DateTime<Utc>,
    ) -> Result<EdgeId, ConstructionError> {
        self.store.add_edge(
            EdgeKind::Authored,
            developer,
            commit,
            attributes([(CREATED_AT, rfc3339(&at))]),
        )
    }

    pub fn link_changed(
        &mut self,
        commit: &NodeId,
        file: &NodeId,
        at: DateTime<Utc>,
    ) -> Result<EdgeId, ConstructionError> {
        self.store.add_edge(
            EdgeKind::Changed,
            commit,
            file,
            attributes([(CREATED_AT, rfc3339(&at))]),
        )
    }

    pub fn link_import(&mut self, from: &NodeId, to: &NodeId) -> Result<EdgeId, ConstructionError> {
        self.store
            .add_edge(EdgeKind::Imports, from, to, Attributes::new())
    }

    pub fn link_token_usage(
        &mut self,
        component: &NodeId,
        token: &NodeId,
    ) -> Result<EdgeId, ConstructionError> {
        self.store
            .add_edge(EdgeKind::UsesToken, component, token, Attributes::new())
    }

    pub fn link_story(
        &mut self,
        component: &NodeId,
        story: &NodeId,
    ) -> Result<EdgeId, ConstructionError> {
        self.store
            .add_edge(EdgeKind::HasStory, component, story, Attributes::new())
    }

    pub fn link_test(
        &mut self,
        component: &NodeId,
        test: &NodeId,
    ) -> Result<EdgeId, ConstructionError> {
        self.store
            .add_edge(EdgeKind::HasTest, component, test, Attributes::new())
    }

    /// Record one drift event against `offender`.
    ///
    /// The edge runs from `observer` (the component or commit the drift was
    /// seen through) to the offender; with no observer it is a self-edge on
    /// the offender. Every call adds a new edge.
    pub fn record_drift(
        &mut self,
        offender: &NodeId,
        observer: Option<&NodeId>,
        severity: DriftSeverity,
        timestamp: DateTime<Utc>,
        mut details: Attributes,
    ) -> Result<EdgeId, ConstructionError> {
        details.insert("severity".to_string(), json!(severity.as_str()));
        details.insert("timestamp".to_string(), rfc3339(&timestamp));
        self.store.add_edge(
            EdgeKind::HasDrift,
            observer.unwrap_or(offender),
            offender,
            details,
        )
    }

    /// Note a package imported from outside the repository.
    pub fn add_external_package(&mut self, name: &str) {
        let name = name.trim();
        if !name.is_empty() {
            self.store
                .metadata_mut()
                .external_packages
                .insert(name.to_string());
        }
    }

    pub fn set_history_range(&mut self, range: DateRange) {
        self.store.metadata_mut().history_range = Some(range);
    }

    pub fn node_count(&self) -> usize {
        self.store.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.store.contains_node(id)
    }

    /// Seal everything added so far into an immutable [`Graph`].
    pub fn build(self) -> Graph {
        self.store.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn commit_attributes_are_recorded() {
        let mut builder = GraphBuilder::new();
        let id = builder
            .add_commit("abc123", "Fix padding", "Ada", "ada@example.com", at(1))
            .unwrap();
        assert_eq!(id.as_str(), "Commit:abc123");

        let graph = builder.build();
        let node = graph.node(&id).unwrap();
        assert_eq!(node.attributes["message"], json!("Fix padding"));
        assert_eq!(node.attributes["timestamp"], json!("2024-03-01T12:00:00Z"));
    }

    #[test]
    fn equivalent_paths_share_a_file_node() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_file("./src/Button.tsx", None).unwrap();
        let b = builder.add_file("src\\Button.tsx", Some("Button")).unwrap();
        assert_eq!(a, b);
        assert_eq!(builder.node_count(), 1);

        let graph = builder.build();
        let node = graph.node(&a).unwrap();
        assert_eq!(node.key, "src/Button.tsx");
        assert_eq!(node.attributes["displayPath"], json!("Button"));
    }

    #[test]
    fn developer_commit_count_is_latest_not_sum() {
        let mut builder = GraphBuilder::new();
        let id = builder
            .add_developer("ada", "Ada", "ada@example.com", Some("https://a.example/ada.png"), 3)
            .unwrap();
        builder
            .add_developer("ada", "Ada L.", "ada@example.com", None, 5)
            .unwrap();

        let graph = builder.build();
        let node = graph.node(&id).unwrap();
        assert_eq!(node.attributes["commitCount"], json!(5));
        assert_eq!(node.attributes["name"], json!("Ada L."));
        assert_eq!(
            node.attributes["avatarUrl"],
            json!("https://a.example/ada.png")
        );
    }

    #[test]
    fn authored_edge_keeps_earliest_created_at() {
        let mut builder = GraphBuilder::new();
        let dev = builder
            .add_developer("ada", "Ada", "ada@example.com", None, 1)
            .unwrap();
        let commit = builder
            .add_commit("abc", "msg", "Ada", "ada@example.com", at(5))
            .unwrap();
        builder.link_authored(&dev, &commit, at(5)).unwrap();
        builder.link_authored(&dev, &commit, at(2)).unwrap();
        builder.link_authored(&dev, &commit, at(9)).unwrap();

        let graph = builder.build();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(
            graph.edges()[0].attributes[CREATED_AT],
            json!("2024-03-02T12:00:00Z")
        );
    }

    #[test]
    fn drift_without_observer_is_a_self_edge() {
        let mut builder = GraphBuilder::new();
        let file = builder.add_file("Card.tsx", None).unwrap();
        builder
            .record_drift(&file, None, DriftSeverity::Warning, at(1), Attributes::new())
            .unwrap();

        let graph = builder.build();
        let edge = &graph.edges()[0];
        assert_eq!(edge.source, file);
        assert_eq!(edge.target, file);
        assert_eq!(edge.attributes["severity"], json!("warning"));
        assert_eq!(edge.attributes["timestamp"], json!("2024-03-01T12:00:00Z"));
    }

    #[test]
    fn link_to_unregistered_node_fails() {
        let mut builder = GraphBuilder::new();
        let component = builder.add_component("Button", Attributes::new()).unwrap();
        let token = NodeId::new(NodeKind::Token, "color.primary");
        let err = builder.link_token_usage(&component, &token).unwrap_err();
        assert!(matches!(err, ConstructionError::EdgeEndpointMissing { .. }));
        assert_eq!(builder.edge_count(), 0);
    }

    #[test]
    fn external_packages_are_deduplicated_and_sorted() {
        let mut builder = GraphBuilder::new();
        builder.add_external_package("react");
        builder.add_external_package("@emotion/styled");
        builder.add_external_package("react");
        builder.add_external_package(" ");

        let graph = builder.build();
        let packages: Vec<_> = graph.metadata().external_packages.iter().cloned().collect();
        assert_eq!(packages, vec!["@emotion/styled", "react"]);
    }
}
