//! Graphviz DOT export for external renderers.
//!
//! Node width grows with degree and node colour follows depth, so the
//! rendering shows both how bushy and how deep each concept is.

use crate::hyponym::graph::HyponymGraph;

/// Points of node size per incident edge.
const POINTS_PER_EDGE: f64 = 16.0;
const POINTS_PER_INCH: f64 = 72.0;
/// Number of colours in the `blues9` scheme.
const COLOR_COUNT: usize = 9;

fn quote(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

impl HyponymGraph {
    /// Render the graph as an undirected DOT graph.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("graph \"hyponyms\" {\n");

        for name in self.nodes() {
            let depth = self.depth(name).unwrap_or(0);
            let width = POINTS_PER_EDGE * self.degree(name) as f64 / POINTS_PER_INCH;
            out.push_str(&format!(
                "  {} [depth={depth}, width={width:.4}, colorscheme=blues9, color={}];\n",
                quote(name),
                (depth + 1).min(COLOR_COUNT)
            ));
        }

        for (a, b) in self.edges() {
            out.push_str(&format!("  {} -- {};\n", quote(a), quote(b)));
        }

        out.push_str("}\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_dot() {
        let mut graph = HyponymGraph::new();
        graph.set_depth("entity", 0);
        graph.add_edge("entity", "object");
        graph.set_depth("object", 1);

        let expected = "graph \"hyponyms\" {\n\
            \x20 \"entity\" [depth=0, width=0.2222, colorscheme=blues9, color=1];\n\
            \x20 \"object\" [depth=1, width=0.2222, colorscheme=blues9, color=2];\n\
            \x20 \"entity\" -- \"object\";\n\
            }\n";
        assert_eq!(graph.to_dot(), expected);
    }

    #[test]
    fn test_quoting_and_color_cap() {
        let mut graph = HyponymGraph::new();
        graph.set_depth("say \"hi\"", 12);

        let dot = graph.to_dot();
        assert!(dot.contains("\"say \\\"hi\\\"\" [depth=12, width=0.0000, colorscheme=blues9, color=9];"));
    }
}
