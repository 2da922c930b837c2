//! Graphviz DOT rendering.

use std::fmt::Write as _;

use crate::graph::Graph;

/// Escape a string for use inside a double-quoted DOT id or label.
fn escape_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for ch in label.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

/// Export the graph as DOT format for visualization.
pub fn export_dot(graph: &Graph) -> String {
    let mut output = String::from("digraph DesignSystemGraph {\n");
    output.push_str("    rankdir=LR;\n");
    output.push_str("    node [style=filled, fontname=\"Helvetica\"];\n");

    // Writing to a String cannot fail.
    for node in graph.nodes() {
        let _ = writeln!(
            output,
            "    \"{}\" [label=\"{}\", shape={}, fillcolor=\"{}\", tooltip=\"{}\"];",
            escape_label(node.id.as_str()),
            escape_label(&node.key),
            node.kind.dot_shape(),
            node.kind.dot_color(),
            node.kind,
        );
    }

    for edge in graph.edges() {
        let _ = writeln!(
            output,
            "    \"{}\" -> \"{}\" [label=\"{}\"];",
            escape_label(edge.source.as_str()),
            escape_label(edge.target.as_str()),
            edge.kind,
        );
    }

    output.push_str("}\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attributes, GraphBuilder};

    #[test]
    fn escapes_quotes_and_backslashes() {
        assert_eq!(escape_label(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_label(r"C:\src"), r"C:\\src");
        assert_eq!(escape_label("a\nb"), "a\\nb");
    }

    #[test]
    fn renders_one_statement_per_node_and_edge() {
        let mut builder = GraphBuilder::new();
        let app = builder.add_file("src/App.tsx", None).unwrap();
        let button = builder.add_file("src/Button.tsx", None).unwrap();
        builder.link_import(&app, &button).unwrap();
        let dot = export_dot(&builder.build());

        assert!(dot.starts_with("digraph DesignSystemGraph {\n"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains(
            "\"File:src/App.tsx\" [label=\"src/App.tsx\", shape=note, fillcolor=\"#dfe7fd\", tooltip=\"File\"];"
        ));
        assert!(dot.contains("\"File:src/App.tsx\" -> \"File:src/Button.tsx\" [label=\"IMPORTS\"];"));
        assert_eq!(dot.matches(" -> ").count(), 1);
    }

    #[test]
    fn quoted_component_names_stay_valid() {
        let mut builder = GraphBuilder::new();
        builder
            .add_component(r#"Icon["close"]"#, Attributes::new())
            .unwrap();
        let dot = export_dot(&builder.build());

        assert!(dot.contains(r#"label="Icon[\"close\"]""#));
        // Every line's unescaped quotes come in pairs.
        for line in dot.lines() {
            let unescaped = line.replace("\\\\", "").replace("\\\"", "");
            assert_eq!(unescaped.matches('"').count() % 2, 0, "unbalanced: {line}");
        }
    }
}
