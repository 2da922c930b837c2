//! Pure queries over a sealed [`Graph`].
//!
//! Nothing here mutates or fails: a graph built from partial input (say, the
//! usage scan was skipped) simply yields empty lists and zero ratios.
//!
//! - [`stats`] - node/edge counts
//! - [`unused`] - unused tokens, untested and undocumented components
//! - [`offenders`] - repeat-offender ranking
//! - [`coverage`] - coverage ratios

pub mod coverage;
pub mod offenders;
pub mod stats;
pub mod unused;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::QueryError;
use crate::graph::Graph;

pub use coverage::{Coverage, calculate_coverage};
pub use offenders::{DEFAULT_MIN_DRIFT_COUNT, RepeatOffender, find_repeat_offenders};
pub use stats::{GraphStats, graph_stats};
pub use unused::{find_undocumented_components, find_unused_tokens, find_untested_components};

/// The closed set of queries a caller can ask for by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Stats,
    UnusedTokens,
    UntestedComponents,
    UndocumentedComponents,
    RepeatOffenders { min_drift_count: usize },
    Coverage,
}

impl QueryKind {
    /// Accepted names, in the order they are listed to users.
    pub const NAMES: [&'static str; 6] = [
        "stats",
        "unused-tokens",
        "untested-components",
        "undocumented-components",
        "repeat-offenders",
        "coverage",
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::UnusedTokens => "unused-tokens",
            Self::UntestedComponents => "untested-components",
            Self::UndocumentedComponents => "undocumented-components",
            Self::RepeatOffenders { .. } => "repeat-offenders",
            Self::Coverage => "coverage",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QueryKind {
    type Err = QueryError;

    /// Exact names only. `repeat-offenders` uses the default threshold.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stats" => Ok(Self::Stats),
            "unused-tokens" => Ok(Self::UnusedTokens),
            "untested-components" => Ok(Self::UntestedComponents),
            "undocumented-components" => Ok(Self::UndocumentedComponents),
            "repeat-offenders" => Ok(Self::RepeatOffenders {
                min_drift_count: DEFAULT_MIN_DRIFT_COUNT,
            }),
            "coverage" => Ok(Self::Coverage),
            other => Err(QueryError::UnknownQuery(other.to_string())),
        }
    }
}

/// Result of [`run_query`], one variant per [`QueryKind`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    Stats(GraphStats),
    Keys(Vec<String>),
    Offenders(Vec<RepeatOffender>),
    Coverage(Coverage),
}

pub fn run_query(graph: &Graph, kind: QueryKind) -> QueryOutput {
    match kind {
        QueryKind::Stats => QueryOutput::Stats(graph_stats(graph)),
        QueryKind::UnusedTokens => QueryOutput::Keys(find_unused_tokens(graph)),
        QueryKind::UntestedComponents => QueryOutput::Keys(find_untested_components(graph)),
        QueryKind::UndocumentedComponents => {
            QueryOutput::Keys(find_undocumented_components(graph))
        }
        QueryKind::RepeatOffenders { min_drift_count } => {
            QueryOutput::Offenders(find_repeat_offenders(graph, min_drift_count))
        }
        QueryKind::Coverage => QueryOutput::Coverage(calculate_coverage(graph)),
    }
}
