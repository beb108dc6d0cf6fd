//! Depth-first construction of hyponym graphs.

use std::collections::HashSet;

use crate::error::{LexigraphError, Result};
use crate::hyponym::graph::HyponymGraph;
use crate::ontology::ConceptNode;

/// A concept on the traversal path and the hyponyms still to visit.
struct Frame<C> {
    name: String,
    children: std::vec::IntoIter<C>,
}

/// Builds a [`HyponymGraph`] from a start concept.
///
/// The walk visits hyponyms in ontology order, exactly like a recursive
/// depth-first traversal, but keeps its own stack so deep hierarchies do
/// not grow the call stack. Each concept is expanded at most once; a link to
/// a concept that was already reached still produces an edge. A concept
/// listed as its own hyponym produces neither an edge nor a revisit.
///
/// Any lookup failure aborts the build and no graph is returned.
#[derive(Debug, Clone, Default)]
pub struct HyponymGraphBuilder {
    reject_cycles: bool,
    max_depth: Option<usize>,
}

impl HyponymGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with [`LexigraphError::CycleDetected`] when a hyponym link leads
    /// back to a concept on the current path.
    pub fn reject_cycles(mut self, reject: bool) -> Self {
        self.reject_cycles = reject;
        self
    }

    /// Do not expand concepts whose depth is `max_depth` or more.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Walk the hyponyms of `start` and build the graph.
    pub fn build<C: ConceptNode>(&self, start: &C) -> Result<HyponymGraph> {
        let mut graph = HyponymGraph::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut on_path: HashSet<String> = HashSet::new();

        let root = self.enter(start, start, &mut graph)?;
        visited.insert(root.name.clone());
        on_path.insert(root.name.clone());
        let mut stack = vec![root];

        loop {
            let (parent, next) = match stack.last_mut() {
                Some(frame) => (frame.name.clone(), frame.children.next()),
                None => break,
            };

            let Some(child) = next else {
                if let Some(done) = stack.pop() {
                    on_path.remove(&done.name);
                }
                continue;
            };

            if child.name() == parent {
                continue;
            }
            if self.reject_cycles && on_path.contains(child.name()) {
                return Err(LexigraphError::cycle(child.name()));
            }

            graph.add_edge(&parent, child.name());

            if visited.insert(child.name().to_string()) {
                let frame = self.enter(&child, start, &mut graph)?;
                on_path.insert(frame.name.clone());
                stack.push(frame);
            }
        }

        Ok(graph)
    }

    /// Record the depth of `node` and fetch the hyponyms to visit next.
    fn enter<C: ConceptNode>(
        &self,
        node: &C,
        start: &C,
        graph: &mut HyponymGraph,
    ) -> Result<Frame<C>> {
        let depth = node.shortest_path_distance(start).ok_or_else(|| {
            LexigraphError::lookup(format!(
                "no path from '{}' to start concept '{}'",
                node.name(),
                start.name()
            ))
        })?;
        graph.set_depth(node.name(), depth);

        let children = match self.max_depth {
            Some(max) if depth >= max => Vec::new(),
            _ => node.hyponyms()?,
        };

        Ok(Frame {
            name: node.name().to_string(),
            children: children.into_iter(),
        })
    }
}
