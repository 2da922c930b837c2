//! Node kinds, deterministic node identifiers, and the node record.

use std::fmt;
use std::path::PathBuf;

use path_clean::PathClean;
use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;

/// The kinds of entity the graph knows about.
///
/// Ordering follows declaration order so grouped statistics come out stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKind {
    Commit,
    Developer,
    File,
    Component,
    Token,
    Story,
    Test,
}

impl NodeKind {
    pub const ALL: [NodeKind; 7] = [
        Self::Commit,
        Self::Developer,
        Self::File,
        Self::Component,
        Self::Token,
        Self::Story,
        Self::Test,
    ];

    /// Tag used as the prefix of every node id of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Commit => "Commit",
            Self::Developer => "Developer",
            Self::File => "File",
            Self::Component => "Component",
            Self::Token => "Token",
            Self::Story => "Story",
            Self::Test => "Test",
        }
    }

    /// Graphviz shape for this kind.
    pub fn dot_shape(self) -> &'static str {
        match self {
            Self::Commit => "circle",
            Self::Developer => "house",
            Self::File => "note",
            Self::Component => "component",
            Self::Token => "diamond",
            Self::Story => "tab",
            Self::Test => "hexagon",
        }
    }

    /// Graphviz fill colour for this kind.
    pub fn dot_color(self) -> &'static str {
        match self {
            Self::Commit => "#f4d35e",
            Self::Developer => "#ee964b",
            Self::File => "#dfe7fd",
            Self::Component => "#9bc53d",
            Self::Token => "#5bc0eb",
            Self::Story => "#c3a6e8",
            Self::Test => "#e55934",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deterministic identifier of a node: `"<Kind>:<naturalKey>"`.
///
/// Two descriptions of the same real-world entity always produce the same id,
/// which is what lets independent collectors converge on one node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(kind: NodeKind, natural_key: &str) -> Self {
        Self(format!("{}:{}", kind.as_str(), natural_key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The natural-key half of the id, without the kind prefix.
    pub fn natural_key(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_str(), |(_, key)| key)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A typed entity in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Caller-supplied identity the id was derived from.
    pub key: String,
    pub attributes: Attributes,
}

impl Node {
    pub fn new(kind: NodeKind, key: impl Into<String>, attributes: Attributes) -> Self {
        let key = key.into();
        Self {
            id: NodeId::new(kind, &key),
            kind,
            key,
            attributes,
        }
    }
}

/// Normalize a file path into the natural key used for `File` nodes.
///
/// Separators become `/`, `.` and `..` segments are folded, and a leading
/// `./` is dropped, so `./src\\Button.tsx` and `src/Button.tsx` meet.
pub fn normalize_path(path: &str) -> String {
    let slashed = path.trim().replace('\\', "/");
    if slashed.is_empty() {
        return slashed;
    }
    PathBuf::from(slashed)
        .clean()
        .to_string_lossy()
        .replace('\\', "/")
}
