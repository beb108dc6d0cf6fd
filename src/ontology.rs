//! Lexical ontologies as seen by the hyponym graph builder.
//!
//! The builder only needs two capabilities from a concept, captured by
//! [`ConceptNode`]. [`memory::Ontology`] is an in-memory data source whose
//! [`memory::Concept`] handles implement the trait.

use crate::error::Result;

pub mod memory;

pub use memory::{Concept, Ontology};

/// A concept in a lexical hierarchy.
pub trait ConceptNode: Sized {
    /// Identifier of the concept, unique within its ontology.
    fn name(&self) -> &str;

    /// Direct hyponyms (more specific concepts), in ontology order.
    ///
    /// Fails with a lookup error naming this concept when the ontology
    /// cannot resolve it.
    fn hyponyms(&self) -> Result<Vec<Self>>;

    /// Number of links on the shortest path between `self` and `other`, or
    /// `None` when the two concepts are not connected.
    fn shortest_path_distance(&self, other: &Self) -> Option<usize>;
}
