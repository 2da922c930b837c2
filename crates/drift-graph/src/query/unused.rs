//! Nodes missing an expected relationship: unused tokens, untested and
//! undocumented components.

use crate::edge::EdgeKind;
use crate::graph::Graph;
use crate::node::NodeKind;

/// Natural keys of `Token` nodes that no component uses, sorted.
pub fn find_unused_tokens(graph: &Graph) -> Vec<String> {
    sorted_keys(
        graph
            .nodes_of_kind(NodeKind::Token)
            .filter(|token| graph.in_degree(&token.id, EdgeKind::UsesToken) == 0)
            .map(|token| token.key.clone()),
    )
}

/// Natural keys of `Component` nodes with no `HAS_TEST` edge, sorted.
pub fn find_untested_components(graph: &Graph) -> Vec<String> {
    components_without(graph, EdgeKind::HasTest)
}

/// Natural keys of `Component` nodes with no `HAS_STORY` edge, sorted.
pub fn find_undocumented_components(graph: &Graph) -> Vec<String> {
    components_without(graph, EdgeKind::HasStory)
}

fn components_without(graph: &Graph, kind: EdgeKind) -> Vec<String> {
    sorted_keys(
        graph
            .nodes_of_kind(NodeKind::Component)
            .filter(|component| graph.out_degree(&component.id, kind) == 0)
            .map(|component| component.key.clone()),
    )
}

fn sorted_keys(keys: impl Iterator<Item = String>) -> Vec<String> {
    let mut keys: Vec<String> = keys.collect();
    keys.sort();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attributes, GraphBuilder};

    #[test]
    fn token_with_a_user_is_not_unused() {
        let mut builder = GraphBuilder::new();
        let t1 = builder.add_token("T1", Attributes::new()).unwrap();
        builder.add_token("T2", Attributes::new()).unwrap();
        let button = builder.add_component("Button", Attributes::new()).unwrap();
        builder.link_token_usage(&button, &t1).unwrap();

        assert_eq!(find_unused_tokens(&builder.build()), vec!["T2"]);
    }

    #[test]
    fn results_are_sorted_regardless_of_insertion() {
        let mut builder = GraphBuilder::new();
        for name in ["zeta", "Alpha", "mid"] {
            builder.add_token(name, Attributes::new()).unwrap();
            builder.add_component(name, Attributes::new()).unwrap();
        }
        let graph = builder.build();
        assert_eq!(find_unused_tokens(&graph), vec!["Alpha", "mid", "zeta"]);
        assert_eq!(find_untested_components(&graph), vec!["Alpha", "mid", "zeta"]);
    }

    #[test]
    fn tested_and_documented_components_drop_out() {
        let mut builder = GraphBuilder::new();
        let button = builder.add_component("Button", Attributes::new()).unwrap();
        let card = builder.add_component("Card", Attributes::new()).unwrap();
        let test = builder.add_test("Button.test.tsx", Attributes::new()).unwrap();
        let story = builder.add_story("Card/Default", Attributes::new()).unwrap();
        builder.link_test(&button, &test).unwrap();
        builder.link_story(&card, &story).unwrap();
        let graph = builder.build();

        assert_eq!(find_untested_components(&graph), vec!["Card"]);
        assert_eq!(find_undocumented_components(&graph), vec!["Button"]);
    }

    #[test]
    fn empty_graph_yields_empty_lists() {
        let graph = GraphBuilder::new().build();
        assert!(find_unused_tokens(&graph).is_empty());
        assert!(find_untested_components(&graph).is_empty());
        assert!(find_undocumented_components(&graph).is_empty());
    }
}
