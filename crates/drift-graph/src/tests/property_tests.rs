//! Property-based tests for drift-graph using proptest.
//!
//! Run with: cargo test --features proptest --package drift-graph property_tests

#![cfg(feature = "proptest")]

use std::collections::{BTreeMap, BTreeSet};

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use crate::query;
use crate::{Attributes, DriftSeverity, GraphBuilder, NodeKind};

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,6}(\\.[a-z0-9]{1,4})?"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Re-adding keys never grows the node set past the distinct keys.
    #[test]
    fn node_count_equals_distinct_keys(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut builder = GraphBuilder::new();
        for key in &keys {
            builder.add_token(key, Attributes::new()).unwrap();
        }
        let distinct: BTreeSet<&String> = keys.iter().collect();
        prop_assert_eq!(builder.build().node_count(), distinct.len());
    }

    /// Unused tokens are exactly the declared tokens no component points at,
    /// sorted.
    #[test]
    fn unused_tokens_complement_used(
        tokens in prop::collection::btree_set(key_strategy(), 1..20),
        used_mask in prop::collection::vec(any::<bool>(), 20),
    ) {
        let mut builder = GraphBuilder::new();
        let component = builder.add_component("C", Attributes::new()).unwrap();
        let mut expected = Vec::new();
        for (token, used) in tokens.iter().zip(used_mask.iter()) {
            let id = builder.add_token(token, Attributes::new()).unwrap();
            if *used {
                builder.link_token_usage(&component, &id).unwrap();
            } else {
                expected.push(token.clone());
            }
        }
        prop_assert_eq!(query::find_unused_tokens(&builder.build()), expected);
    }

    /// Offender counts equal the number of drift events per file, and the
    /// ranking is non-increasing.
    #[test]
    fn offenders_match_event_tally(events in prop::collection::vec(0usize..5, 0..40)) {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut builder = GraphBuilder::new();
        let mut tally: BTreeMap<String, usize> = BTreeMap::new();
        for file in &events {
            let path = format!("src/f{file}.tsx");
            let id = builder.add_file(&path, None).unwrap();
            builder
                .record_drift(&id, None, DriftSeverity::Warning, at, Attributes::new())
                .unwrap();
            *tally.entry(path).or_default() += 1;
        }

        let offenders = query::find_repeat_offenders(&builder.build(), 1);
        prop_assert_eq!(offenders.len(), tally.len());
        for pair in offenders.windows(2) {
            prop_assert!(pair[0].drift_count >= pair[1].drift_count);
        }
        for offender in offenders {
            prop_assert_eq!(tally[&offender.file], offender.drift_count);
        }
    }

    /// Coverage ratios stay within [0, 1].
    #[test]
    fn coverage_is_a_ratio(flags in prop::collection::vec((any::<bool>(), any::<bool>(), any::<bool>()), 0..15)) {
        let mut builder = GraphBuilder::new();
        let token = builder.add_token("t", Attributes::new()).unwrap();
        for (i, (uses_token, tested, documented)) in flags.iter().enumerate() {
            let c = builder.add_component(&format!("C{i}"), Attributes::new()).unwrap();
            if *uses_token {
                builder.link_token_usage(&c, &token).unwrap();
            }
            if *tested {
                let t = builder.add_test(&format!("C{i}.test"), Attributes::new()).unwrap();
                builder.link_test(&c, &t).unwrap();
            }
            if *documented {
                let s = builder.add_story(&format!("C{i}.story"), Attributes::new()).unwrap();
                builder.link_story(&c, &s).unwrap();
            }
        }
        let graph = builder.build();
        let coverage = query::calculate_coverage(&graph);
        prop_assert_eq!(coverage.component_count, flags.len());
        for ratio in [
            coverage.token_coverage,
            coverage.test_coverage,
            coverage.story_coverage,
            coverage.component_coverage,
        ] {
            prop_assert!((0.0..=1.0).contains(&ratio));
        }
        prop_assert!(coverage.component_coverage <= coverage.test_coverage);
        prop_assert_eq!(
            query::graph_stats(&graph).nodes_by_type.get(&NodeKind::Component).copied().unwrap_or(0),
            flags.len()
        );
    }
}
