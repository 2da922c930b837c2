//! Edge kinds, edge identifiers, and the edge record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::node::NodeId;

/// Typed, directed relationships between nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeKind {
    /// Developer -> Commit
    Authored,
    /// Commit -> File
    Changed,
    /// File -> File
    Imports,
    /// Component -> Token
    UsesToken,
    /// Component -> Story
    HasStory,
    /// Component -> Test
    HasTest,
    /// Observer -> offending File or Component. One edge per observed event.
    HasDrift,
}

impl EdgeKind {
    pub const ALL: [EdgeKind; 7] = [
        Self::Authored,
        Self::Changed,
        Self::Imports,
        Self::UsesToken,
        Self::HasStory,
        Self::HasTest,
        Self::HasDrift,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Authored => "AUTHORED",
            Self::Changed => "CHANGED",
            Self::Imports => "IMPORTS",
            Self::UsesToken => "USES_TOKEN",
            Self::HasStory => "HAS_STORY",
            Self::HasTest => "HAS_TEST",
            Self::HasDrift => "HAS_DRIFT",
        }
    }

    /// Cumulative kinds keep every occurrence as its own edge instead of
    /// merging on `(kind, source, target)`.
    pub fn is_cumulative(self) -> bool {
        matches!(self, Self::HasDrift)
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of an edge: `"<KIND>:<source>-><target>"`, with a `#<seq>`
/// suffix for cumulative kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    pub fn new(kind: EdgeKind, source: &NodeId, target: &NodeId) -> Self {
        Self(format!("{}:{}->{}", kind.as_str(), source, target))
    }

    pub fn with_sequence(kind: EdgeKind, source: &NodeId, target: &NodeId, seq: u64) -> Self {
        Self(format!("{}:{}->{}#{}", kind.as_str(), source, target, seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A typed, directed relationship between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    pub source: NodeId,
    pub target: NodeId,
    pub attributes: Attributes,
}
