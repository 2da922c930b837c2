//! Serializers for a sealed [`Graph`].
//!
//! Every format walks nodes and edges in creation order, so successive runs
//! over the same input diff cleanly.

pub mod cytoscape;
pub mod dot;
pub mod json;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::graph::Graph;

pub use cytoscape::{CytoscapeElement, CytoscapeElements, export_cytoscape};
pub use dot::export_dot;
pub use json::{GraphDocument, export_json, to_json_string};

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Dot,
    Cytoscape,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Dot => "dot",
            Self::Cytoscape => "cytoscape",
        }
    }

    /// Conventional file extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json | Self::Cytoscape => "json",
            Self::Dot => "dot",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "dot" | "graphviz" => Ok(Self::Dot),
            "cytoscape" => Ok(Self::Cytoscape),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Render `graph` in `format` as text.
pub fn export(graph: &Graph, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => to_json_string(graph),
        ExportFormat::Dot => Ok(export_dot(graph)),
        ExportFormat::Cytoscape => Ok(serde_json::to_string_pretty(&export_cytoscape(graph))?),
    }
}
