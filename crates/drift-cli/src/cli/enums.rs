use clap::ValueEnum;
use drift_graph::{ExportFormat, QueryKind};
use serde::{Deserialize, Serialize};

/// Queries selectable from the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum QueryName {
    /// Tokens no component uses
    #[value(name = "unused-tokens")]
    UnusedTokens,

    /// Components without a test
    #[value(name = "untested-components")]
    UntestedComponents,

    /// Components without a story
    #[value(name = "undocumented-components")]
    UndocumentedComponents,

    /// Files with at least --min-drift-count drift events
    #[value(name = "repeat-offenders")]
    RepeatOffenders,

    /// Share of components with tokens, tests and stories
    #[value(name = "coverage")]
    Coverage,
}

impl QueryName {
    /// The library query this name selects.
    pub fn to_query_kind(self, min_drift_count: usize) -> QueryKind {
        match self {
            Self::UnusedTokens => QueryKind::UnusedTokens,
            Self::UntestedComponents => QueryKind::UntestedComponents,
            Self::UndocumentedComponents => QueryKind::UndocumentedComponents,
            Self::RepeatOffenders => QueryKind::RepeatOffenders { min_drift_count },
            Self::Coverage => QueryKind::Coverage,
        }
    }
}

/// Export formats selectable from the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ExportFormatArg {
    /// Full JSON document (nodes, edges, metadata)
    #[value(name = "json")]
    Json,

    /// Graphviz DOT
    #[value(name = "dot")]
    Dot,

    /// Cytoscape.js elements
    #[value(name = "cytoscape")]
    Cytoscape,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Json => ExportFormat::Json,
            ExportFormatArg::Dot => ExportFormat::Dot,
            ExportFormatArg::Cytoscape => ExportFormat::Cytoscape,
        }
    }
}

/// How command results are printed
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}
