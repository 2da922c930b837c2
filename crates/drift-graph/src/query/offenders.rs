//! Repeat-offender ranking over `HAS_DRIFT` events.

use rustc_hash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};

use crate::edge::EdgeKind;
use crate::graph::Graph;
use crate::node::NodeId;

/// Threshold used when the caller does not pick one.
pub const DEFAULT_MIN_DRIFT_COUNT: usize = 2;

/// A node that drifted at least the requested number of times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatOffender {
    /// Natural key of the offending node (usually a file path).
    pub file: String,
    pub drift_count: usize,
}

/// Count `HAS_DRIFT` edges per target and keep targets with at least
/// `min_drift_count` of them.
///
/// Sorted by count, highest first; ties by file, ascending.
pub fn find_repeat_offenders(graph: &Graph, min_drift_count: usize) -> Vec<RepeatOffender> {
    let mut counts: HashMap<&NodeId, usize> = HashMap::default();
    for edge in graph.edges_of_kind(EdgeKind::HasDrift) {
        *counts.entry(&edge.target).or_default() += 1;
    }

    let mut offenders: Vec<RepeatOffender> = counts
        .into_iter()
        .filter(|(_, count)| *count >= min_drift_count)
        .map(|(target, drift_count)| RepeatOffender {
            file: graph
                .node(target)
                .map_or_else(|| target.natural_key().to_string(), |n| n.key.clone()),
            drift_count,
        })
        .collect();

    offenders.sort_by(|a, b| {
        b.drift_count
            .cmp(&a.drift_count)
            .then_with(|| a.file.cmp(&b.file))
    });
    offenders
}
