//! Attribute merge policy for repeated inserts.
//!
//! Collectors describe the same commit, file, or developer piecemeal and in
//! no particular order. The store never decides how two descriptions combine;
//! it asks this module, so the policy can be tested without a store.
//!
//! Rules:
//! - node fields are overwritten by the latest caller-supplied value
//!   (developer `commitCount` included: it is replaced, never summed);
//! - fields the caller did not mention are preserved;
//! - an incoming `null` never erases a known value;
//! - edge `createdAt` keeps the earliest value observed.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use crate::attributes::{Attributes, CREATED_AT};
use crate::edge::EdgeKind;
use crate::node::NodeKind;

/// What a merge does with one field when both sides carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPolicy {
    /// Latest value wins.
    Overwrite,
    /// Earliest value wins (first-seen semantics).
    KeepEarliest,
}

/// The record a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeTarget {
    Node(NodeKind),
    Edge(EdgeKind),
}

/// Policy for a single field.
pub fn field_policy(target: MergeTarget, key: &str) -> FieldPolicy {
    match target {
        MergeTarget::Edge(_) if key == CREATED_AT => FieldPolicy::KeepEarliest,
        _ => FieldPolicy::Overwrite,
    }
}

/// Merge `incoming` node attributes into `existing`.
pub fn merge_node_attributes(kind: NodeKind, existing: &mut Attributes, incoming: Attributes) {
    merge_with(MergeTarget::Node(kind), existing, incoming);
}

/// Merge `incoming` edge attributes into `existing`.
pub fn merge_edge_attributes(kind: EdgeKind, existing: &mut Attributes, incoming: Attributes) {
    merge_with(MergeTarget::Edge(kind), existing, incoming);
}

fn merge_with(target: MergeTarget, existing: &mut Attributes, incoming: Attributes) {
    for (key, value) in incoming {
        if value.is_null() && existing.get(&key).is_some_and(|v| !v.is_null()) {
            continue;
        }

        match existing.get_mut(&key) {
            None => {
                existing.insert(key, value);
            }
            Some(current) => match field_policy(target, &key) {
                FieldPolicy::Overwrite => *current = value,
                FieldPolicy::KeepEarliest => {
                    if current.is_null() || compare_timestamps(&value, current) == Ordering::Less {
                        *current = value;
                    }
                }
            },
        }
    }
}

/// Order two timestamp-like values.
///
/// RFC 3339 strings compare as instants, numbers numerically, anything else
/// falls back to comparing the rendered text.
pub fn compare_timestamps(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => match (parse_instant(x), parse_instant(y)) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => x.cmp(y),
        },
        _ => a.to_string().cmp(&b.to_string()),
    }
}

fn parse_instant(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::attributes;
    use serde_json::json;

    #[test]
    fn latest_value_overwrites_and_unspecified_fields_survive() {
        let mut existing = attributes([("name", json!("Ada")), ("email", json!("ada@example.com"))]);
        merge_node_attributes(
            NodeKind::Developer,
            &mut existing,
            attributes([("name", json!("Ada Lovelace"))]),
        );
        assert_eq!(existing["name"], json!("Ada Lovelace"));
        assert_eq!(existing["email"], json!("ada@example.com"));
    }

    #[test]
    fn commit_count_is_replaced_not_summed() {
        let mut existing = attributes([("commitCount", json!(3))]);
        merge_node_attributes(
            NodeKind::Developer,
            &mut existing,
            attributes([("commitCount", json!(5))]),
        );
        assert_eq!(existing["commitCount"], json!(5));
    }

    #[test]
    fn null_does_not_erase_known_value() {
        let mut existing = attributes([("avatarUrl", json!("https://example.com/a.png"))]);
        merge_node_attributes(
            NodeKind::Developer,
            &mut existing,
            attributes([("avatarUrl", Value::Null)]),
        );
        assert_eq!(existing["avatarUrl"], json!("https://example.com/a.png"));
    }

    #[test]
    fn null_fills_a_missing_field() {
        let mut existing = Attributes::new();
        merge_node_attributes(
            NodeKind::File,
            &mut existing,
            attributes([("displayPath", Value::Null)]),
        );
        assert_eq!(existing.get("displayPath"), Some(&Value::Null));
    }

    #[test]
    fn created_at_keeps_earliest_rfc3339() {
        let mut existing = attributes([(CREATED_AT, json!("2024-03-01T10:00:00Z"))]);
        merge_edge_attributes(
            EdgeKind::Changed,
            &mut existing,
            attributes([(CREATED_AT, json!("2024-01-15T08:30:00+01:00"))]),
        );
        assert_eq!(existing[CREATED_AT], json!("2024-01-15T08:30:00+01:00"));

        merge_edge_attributes(
            EdgeKind::Changed,
            &mut existing,
            attributes([(CREATED_AT, json!("2025-01-01T00:00:00Z"))]),
        );
        assert_eq!(existing[CREATED_AT], json!("2024-01-15T08:30:00+01:00"));
    }

    #[test]
    fn created_at_compares_epoch_numbers() {
        let mut existing = attributes([(CREATED_AT, json!(1_700_000_000))]);
        merge_edge_attributes(
            EdgeKind::Imports,
            &mut existing,
            attributes([(CREATED_AT, json!(1_600_000_000))]),
        );
        assert_eq!(existing[CREATED_AT], json!(1_600_000_000));
    }

    #[test]
    fn created_at_on_nodes_is_plain_overwrite() {
        assert_eq!(
            field_policy(MergeTarget::Node(NodeKind::Commit), CREATED_AT),
            FieldPolicy::Overwrite
        );
        assert_eq!(
            field_policy(MergeTarget::Edge(EdgeKind::Authored), CREATED_AT),
            FieldPolicy::KeepEarliest
        );
    }

    #[test]
    fn other_edge_fields_overwrite() {
        let mut existing = attributes([("weight", json!(1)), (CREATED_AT, json!("2024-01-01T00:00:00Z"))]);
        merge_edge_attributes(
            EdgeKind::UsesToken,
            &mut existing,
            attributes([("weight", json!(4))]),
        );
        assert_eq!(existing["weight"], json!(4));
        assert_eq!(existing[CREATED_AT], json!("2024-01-01T00:00:00Z"));
    }
}
