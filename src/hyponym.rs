//! Hyponym graphs over a lexical ontology.
//!
//! Starting from one concept, [`HyponymGraphBuilder`] walks the hyponym
//! relation depth-first and records an undirected edge from every concept to
//! each of its direct hyponyms, along with each concept's distance from the
//! start.
//!
//! # Examples
//!
//! ```
//! use lexigraph::hyponym::hyponym_graph;
//! use lexigraph::ontology::Ontology;
//!
//! let mut ontology = Ontology::new();
//! ontology.add_hyponym("entity", "object");
//! ontology.add_hyponym("entity", "abstraction");
//! ontology.add_hyponym("object", "organism");
//!
//! let graph = hyponym_graph(&ontology.concept("entity")).unwrap();
//!
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.edge_count(), 3);
//! assert!(graph.contains_edge("organism", "object"));
//! assert_eq!(graph.depth("entity"), Some(0));
//! assert_eq!(graph.depth("organism"), Some(2));
//! ```

use crate::error::Result;
use crate::ontology::ConceptNode;

pub mod builder;
pub mod dot;
pub mod graph;

pub use builder::HyponymGraphBuilder;
pub use graph::{GraphSummary, HyponymGraph};

/// Build the hyponym graph rooted at `start` with default builder settings.
pub fn hyponym_graph<C: ConceptNode>(start: &C) -> Result<HyponymGraph> {
    HyponymGraphBuilder::new().build(start)
}
