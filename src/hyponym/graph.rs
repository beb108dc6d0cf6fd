//! Undirected concept graph with a depth annotation per node.

use std::collections::{BTreeMap, HashMap};

use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};

/// Graph produced by [`HyponymGraphBuilder`](super::HyponymGraphBuilder).
///
/// Nodes are concept names, edges join a concept to its direct hyponyms,
/// and every node carries its distance from the start concept. The graph
/// has no public mutators.
#[derive(Debug, Clone, Default)]
pub struct HyponymGraph {
    graph: UnGraph<String, ()>,
    node_map: HashMap<String, NodeIndex>,
    depth: HashMap<String, usize>,
}

/// Serializable view of a [`HyponymGraph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub start: Option<String>,
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
    pub depth: BTreeMap<String, usize>,
}

impl HyponymGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(name) {
            return index;
        }
        let index = self.graph.add_node(name.to_string());
        self.node_map.insert(name.to_string(), index);
        index
    }

    /// Record a node and its depth.
    pub(crate) fn set_depth(&mut self, name: &str, depth: usize) {
        self.ensure_node(name);
        self.depth.insert(name.to_string(), depth);
    }

    /// Add the undirected edge `a -- b`. Self-loops and duplicate edges are
    /// ignored; returns whether an edge was added.
    pub(crate) fn add_edge(&mut self, a: &str, b: &str) -> bool {
        if a == b {
            return false;
        }
        let a = self.ensure_node(a);
        let b = self.ensure_node(b);
        if self.graph.find_edge(a, b).is_some() {
            return false;
        }
        self.graph.add_edge(a, b, ());
        true
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    /// Whether `a` and `b` are joined, in either direction.
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        match (self.node_map.get(a), self.node_map.get(b)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Distance of `name` from the start concept.
    pub fn depth(&self, name: &str) -> Option<usize> {
        self.depth.get(name).copied()
    }

    /// All recorded depths.
    pub fn depths(&self) -> &HashMap<String, usize> {
        &self.depth
    }

    /// Number of edges touching `name`; 0 for unknown names.
    pub fn degree(&self, name: &str) -> usize {
        self.node_map
            .get(name)
            .map_or(0, |&index| self.graph.neighbors(index).count())
    }

    /// Node names in the order they were first reached.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph
            .node_indices()
            .map(move |index| self.graph[index].as_str())
    }

    /// Edges as `(hypernym, hyponym)` pairs, in the order they were added.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.graph.edge_indices().filter_map(move |edge| {
            self.graph
                .edge_endpoints(edge)
                .map(|(a, b)| (self.graph[a].as_str(), self.graph[b].as_str()))
        })
    }

    /// Names adjacent to `name`, sorted.
    pub fn neighbors(&self, name: &str) -> Vec<&str> {
        let mut neighbors: Vec<&str> = match self.node_map.get(name) {
            Some(&index) => self
                .graph
                .neighbors(index)
                .map(|n| self.graph[n].as_str())
                .collect(),
            None => Vec::new(),
        };
        neighbors.sort_unstable();
        neighbors
    }

    /// The node at depth 0, if any.
    pub fn start(&self) -> Option<&str> {
        self.nodes().find(|name| self.depth(name) == Some(0))
    }

    /// Order-independent edge set, each pair sorted.
    pub fn edge_set(&self) -> std::collections::BTreeSet<(String, String)> {
        self.edges()
            .map(|(a, b)| {
                if a <= b {
                    (a.to_string(), b.to_string())
                } else {
                    (b.to_string(), a.to_string())
                }
            })
            .collect()
    }

    /// Serializable view of nodes, edges and depths.
    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            start: self.start().map(str::to_string),
            nodes: self.nodes().map(str::to_string).collect(),
            edges: self
                .edges()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
            depth: self
                .depth
                .iter()
                .map(|(name, &depth)| (name.clone(), depth))
                .collect(),
        }
    }
}
