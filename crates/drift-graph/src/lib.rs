//! # drift-graph
//!
//! Typed property graph of a design system and its development history.
//!
//! The graph links who changed what (developers, commits, files) with what the
//! design system is made of (components, tokens, stories, tests) and records
//! drift events against the files that strayed from it. It has no I/O of its
//! own: collectors hand it plain records, and callers read it back through
//! queries and exporters.
//!
//! ## Architecture
//!
//! ```text
//!   collector records ──► GraphBuilder ──► GraphStore ──build()──► Graph
//!   (git, usage, imports)   (typed ids)    (merge, validate)     (Arc, read-only)
//!                                                                   │
//!                                                   ┌───────────────┴───────────────┐
//!                                                   ▼                               ▼
//!                                                query                           export
//!                                  (stats, unused, offenders, coverage)   (json, dot, cytoscape)
//! ```
//!
//! Construction is single-writer (`&mut self`). Once built, a [`Graph`] is
//! immutable and cheap to clone, so any number of threads may query it at
//! once.
//!
//! ## Quick Start
//!
//! ```rust
//! use drift_graph::{Attributes, GraphBuilder, export, query};
//!
//! # fn main() -> Result<(), drift_graph::Error> {
//! let mut builder = GraphBuilder::new();
//! let button = builder.add_component("Button", Attributes::new())?;
//! let primary = builder.add_token("color.primary", Attributes::new())?;
//! builder.add_token("color.legacy", Attributes::new())?;
//! builder.link_token_usage(&button, &primary)?;
//!
//! let graph = builder.build();
//! assert_eq!(query::find_unused_tokens(&graph), vec!["color.legacy"]);
//! assert_eq!(query::find_untested_components(&graph), vec!["Button"]);
//!
//! let dot = export::export(&graph, "dot".parse()?)?;
//! assert!(dot.starts_with("digraph"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Identity
//!
//! Every node id is `"<Kind>:<naturalKey>"` and every non-drift edge id is
//! `"<KIND>:<source>-><target>"`, so re-adding the same entity merges into
//! the existing record instead of duplicating it. See [`merge`] for how
//! attributes combine.

pub mod attributes;
pub mod builder;
pub mod edge;
pub mod error;
pub mod export;
pub mod graph;
pub mod ingest;
pub mod interrupt;
pub mod merge;
pub mod node;
pub mod query;
pub mod store;

pub use attributes::Attributes;
pub use builder::{DriftSeverity, GraphBuilder};
pub use edge::{Edge, EdgeId, EdgeKind};
pub use error::{ConstructionError, Endpoint, Error, ExportError, QueryError, Result};
pub use export::ExportFormat;
pub use graph::{DateRange, Graph, GraphMetadata};
pub use ingest::{
    ChangedFile, CommitRecord, ComponentRecord, DeveloperRecord, GitHistory, HardcodedValue,
    ImportEdge, ImportReport, IngestSummary, TokenDefinition, TokenUsage, UsageReport,
};
pub use interrupt::Interrupt;
pub use node::{Node, NodeId, NodeKind};
pub use query::{QueryKind, QueryOutput};
pub use store::GraphStore;

#[cfg(test)]
mod tests;
