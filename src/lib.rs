//! # lexigraph
//!
//! Small text-processing helpers for corpus work, and construction of
//! hyponym graphs over a lexical ontology.
//!
//! ## Features
//!
//! - Exercise extraction and markup stripping
//! - Tokenize/stem pipeline with pluggable tokenizers and stemmers
//! - Lexical diversity, percentages and tagging accuracy
//! - Hyponym graphs annotated with depth, exported as Graphviz DOT
//!
//! ```
//! use lexigraph::hyponym::hyponym_graph;
//! use lexigraph::ontology::Ontology;
//!
//! let mut ontology = Ontology::new();
//! ontology.add_hyponym("animal", "dog");
//! ontology.add_hyponym("animal", "cat");
//!
//! let graph = hyponym_graph(&ontology.concept("animal")).unwrap();
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.depth("dog"), Some(1));
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod extract;
pub mod hyponym;
pub mod ontology;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
