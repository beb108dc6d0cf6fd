//! Tokenizer implementations for text analysis.
//!
//! - [`regex::RegexTokenizer`] - Pattern-based tokenization (default `\w+`)
//! - [`unicode_word::UnicodeWordTokenizer`] - Unicode word boundaries (UAX #29)
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace
//!
//! # Examples
//!
//! ```
//! use lexigraph::analysis::tokenizer::Tokenizer;
//! use lexigraph::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so tokenizers can be shared through
/// `Arc` inside analyzers.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;
pub mod unicode_word;
pub mod whitespace;
