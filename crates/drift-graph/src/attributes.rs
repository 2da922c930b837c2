//! Attribute maps carried by nodes and edges.

use indexmap::IndexMap;
use serde_json::Value;

/// Insertion-ordered attribute map. Ordering is part of the output contract:
/// exports list attributes in the order collectors first supplied them.
pub type Attributes = IndexMap<String, Value>;

/// Key for the "first seen" timestamp on edges.
pub const CREATED_AT: &str = "createdAt";

/// Build an attribute map from key/value pairs.
pub fn attributes<I, K, V>(pairs: I) -> Attributes
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pairs_keep_insertion_order() {
        let attrs = attributes([("zeta", json!(1)), ("alpha", json!(2))]);
        let keys: Vec<_> = attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }
}
