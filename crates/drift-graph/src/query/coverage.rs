//! Coverage ratios over `Component` nodes.

use serde::{Deserialize, Serialize};

use crate::edge::EdgeKind;
use crate::graph::Graph;
use crate::node::NodeKind;

/// Fractions of components meeting each structural condition, in `[0, 1]`.
///
/// With no components every ratio is `0.0`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coverage {
    pub component_count: usize,
    /// At least one `USES_TOKEN` edge.
    pub token_coverage: f64,
    /// At least one `HAS_TEST` edge.
    pub test_coverage: f64,
    /// At least one `HAS_STORY` edge.
    pub story_coverage: f64,
    /// All three of the above.
    pub component_coverage: f64,
}

pub fn calculate_coverage(graph: &Graph) -> Coverage {
    let mut total = 0usize;
    let mut with_tokens = 0usize;
    let mut with_tests = 0usize;
    let mut with_stories = 0usize;
    let mut complete = 0usize;

    for component in graph.nodes_of_kind(NodeKind::Component) {
        total += 1;
        let tokens = graph.out_degree(&component.id, EdgeKind::UsesToken) > 0;
        let tests = graph.out_degree(&component.id, EdgeKind::HasTest) > 0;
        let stories = graph.out_degree(&component.id, EdgeKind::HasStory) > 0;

        with_tokens += usize::from(tokens);
        with_tests += usize::from(tests);
        with_stories += usize::from(stories);
        complete += usize::from(tokens && tests && stories);
    }

    Coverage {
        component_count: total,
        token_coverage: ratio(with_tokens, total),
        test_coverage: ratio(with_tests, total),
        story_coverage: ratio(with_stories, total),
        component_coverage: ratio(complete, total),
    }
}

fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attributes, GraphBuilder};

    #[test]
    fn zero_components_is_all_zero() {
        let mut builder = GraphBuilder::new();
        builder.add_token("orphan", Attributes::new()).unwrap();
        let coverage = calculate_coverage(&builder.build());

        assert_eq!(coverage, Coverage::default());
        assert!(!coverage.token_coverage.is_nan());
    }

    #[test]
    fn ratios_count_components_not_edges() {
        let mut builder = GraphBuilder::new();
        let button = builder.add_component("Button", Attributes::new()).unwrap();
        let card = builder.add_component("Card", Attributes::new()).unwrap();
        builder.add_component("Modal", Attributes::new()).unwrap();
        builder.add_component("Tooltip", Attributes::new()).unwrap();

        for name in ["color.primary", "space.2", "radius.sm"] {
            let token = builder.add_token(name, Attributes::new()).unwrap();
            builder.link_token_usage(&button, &token).unwrap();
        }
        let card_token = builder.add_token("color.surface", Attributes::new()).unwrap();
        builder.link_token_usage(&card, &card_token).unwrap();

        let test = builder.add_test("Button.test.tsx", Attributes::new()).unwrap();
        builder.link_test(&button, &test).unwrap();
        let story = builder.add_story("Button/Primary", Attributes::new()).unwrap();
        builder.link_story(&button, &story).unwrap();

        let coverage = calculate_coverage(&builder.build());
        assert_eq!(coverage.component_count, 4);
        assert_eq!(coverage.token_coverage, 0.5);
        assert_eq!(coverage.test_coverage, 0.25);
        assert_eq!(coverage.story_coverage, 0.25);
        assert_eq!(coverage.component_coverage, 0.25);
    }
}
