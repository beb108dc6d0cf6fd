//! Error types for the lexigraph library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LexigraphError`] enum.
//!
//! # Examples
//!
//! ```
//! use lexigraph::error::{LexigraphError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexigraphError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexigraph operations.
#[derive(Error, Debug)]
pub enum LexigraphError {
    /// I/O errors (reading corpora, ontology files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A concept's hyponyms or distance could not be resolved.
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// A hyponym link points back to an ancestor on the current path.
    #[error("Cycle detected at concept '{concept}'")]
    CycleDetected { concept: String },

    /// Analysis-related errors (tokenization, patterns, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid numeric or structural input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed configuration or data files.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with LexigraphError.
pub type Result<T> = std::result::Result<T, LexigraphError>;

impl LexigraphError {
    /// Create a new lookup error.
    pub fn lookup<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Lookup(msg.into())
    }

    /// Create a new cycle error for the given concept.
    pub fn cycle<S: Into<String>>(concept: S) -> Self {
        LexigraphError::CycleDetected {
            concept: concept.into(),
        }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexigraphError::InvalidArgument(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexigraphError::lookup("no concept named 'dog'");
        assert_eq!(error.to_string(), "Lookup error: no concept named 'dog'");

        let error = LexigraphError::cycle("animal");
        assert_eq!(error.to_string(), "Cycle detected at concept 'animal'");

        let error = LexigraphError::invalid_argument("Lists must have the same length.");
        assert_eq!(
            error.to_string(),
            "Invalid argument: Lists must have the same length."
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let error = LexigraphError::from(json_error);

        assert!(matches!(error, LexigraphError::Json(_)));
        assert!(error.to_string().starts_with("JSON error: "));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = LexigraphError::from(io_error);

        match error {
            LexigraphError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
