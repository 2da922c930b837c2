//! Mutable node/edge storage used during construction.
//!
//! The store owns identity assignment and referential integrity. It is fed by
//! [`GraphBuilder`](crate::GraphBuilder) and sealed into a [`Graph`] exactly
//! once.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::attributes::Attributes;
use crate::edge::{Edge, EdgeId, EdgeKind};
use crate::error::{ConstructionError, Endpoint};
use crate::graph::{Graph, GraphMetadata};
use crate::interrupt::Interrupt;
use crate::merge::{merge_edge_attributes, merge_node_attributes};
use crate::node::{Node, NodeId, NodeKind};

/// Structural edge identity: `(kind, source, target)`, plus the sequence
/// number for cumulative kinds.
///
/// Keyed structurally because natural keys may contain `->`, which makes the
/// rendered [`EdgeId`] ambiguous.
type EdgeKey = (EdgeKind, NodeId, NodeId, Option<u64>);

/// Node and edge tables under construction.
///
/// Single writer: every mutation takes `&mut self`.
#[derive(Debug, Default)]
pub struct GraphStore {
    nodes: IndexMap<NodeId, Node>,
    edges: IndexMap<EdgeKey, Edge>,
    /// Next sequence number for cumulative edges.
    drift_seq: u64,
    metadata: GraphMetadata,
    interrupt: Interrupt,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interrupt(interrupt: Interrupt) -> Self {
        Self {
            interrupt,
            ..Self::default()
        }
    }

    /// Insert or merge a node and return its id.
    ///
    /// Calling this any number of times with the same `(kind, natural_key)`
    /// leaves exactly one node; later attributes overwrite earlier ones.
    pub fn add_node(
        &mut self,
        kind: NodeKind,
        natural_key: &str,
        attrs: Attributes,
    ) -> Result<NodeId, ConstructionError> {
        self.interrupt.check()?;

        if natural_key.trim().is_empty() {
            return Err(ConstructionError::EmptyNaturalKey { kind });
        }

        let id = NodeId::new(kind, natural_key);
        match self.nodes.get_mut(&id) {
            Some(existing) => {
                trace!(node = %id, "merging node attributes");
                merge_node_attributes(kind, &mut existing.attributes, attrs);
            }
            None => {
                trace!(node = %id, "adding node");
                self.nodes
                    .insert(id.clone(), Node::new(kind, natural_key, attrs));
            }
        }
        Ok(id)
    }

    /// Insert or merge an edge and return its id.
    ///
    /// Both endpoints must already be in the store. Cumulative kinds
    /// (`HAS_DRIFT`) get a fresh sequenced id on every call.
    pub fn add_edge(
        &mut self,
        kind: EdgeKind,
        source: &NodeId,
        target: &NodeId,
        attrs: Attributes,
    ) -> Result<EdgeId, ConstructionError> {
        self.interrupt.check()?;
        self.require(kind, Endpoint::Source, source)?;
        self.require(kind, Endpoint::Target, target)?;

        if kind.is_cumulative() {
            let seq = self.drift_seq;
            let id = EdgeId::with_sequence(kind, source, target, seq);
            self.drift_seq += 1;
            trace!(edge = %id, "recording cumulative edge");
            self.edges.insert(
                (kind, source.clone(), target.clone(), Some(seq)),
                Edge {
                    id: id.clone(),
                    kind,
                    source: source.clone(),
                    target: target.clone(),
                    attributes: attrs,
                },
            );
            return Ok(id);
        }

        let key = (kind, source.clone(), target.clone(), None);
        if let Some(existing) = self.edges.get_mut(&key) {
            trace!(edge = %existing.id, "merging edge attributes");
            merge_edge_attributes(kind, &mut existing.attributes, attrs);
            return Ok(existing.id.clone());
        }

        let id = EdgeId::new(kind, source, target);
        trace!(edge = %id, "adding edge");
        self.edges.insert(
            key,
            Edge {
                id: id.clone(),
                kind,
                source: source.clone(),
                target: target.clone(),
                attributes: attrs,
            },
        );
        Ok(id)
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn metadata_mut(&mut self) -> &mut GraphMetadata {
        &mut self.metadata
    }

    /// Seal the store into an immutable snapshot with adjacency indices.
    pub fn build(self) -> Graph {
        debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "sealing graph"
        );
        Graph::from_parts(
            self.nodes.into_values().collect(),
            self.edges.into_values().collect(),
            self.metadata,
        )
    }

    fn require(
        &self,
        kind: EdgeKind,
        endpoint: Endpoint,
        id: &NodeId,
    ) -> Result<(), ConstructionError> {
        if self.nodes.contains_key(id) {
            Ok(())
        } else {
            Err(ConstructionError::EdgeEndpointMissing {
                kind,
                endpoint,
                id: id.clone(),
            })
        }
    }
}
