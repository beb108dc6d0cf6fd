//! Analyzers that combine tokenizers and filters, plus the tokenize/stem glue.
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```
//!
//! # Examples
//!
//! ```
//! use lexigraph::analysis::analyzer::{stem_tokens, tokenize};
//! use lexigraph::analysis::token_filter::stem::PorterStemmer;
//! use lexigraph::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let stemmer = PorterStemmer::new();
//!
//! let stems = tokenize("running flies", &tokenizer, &stemmer).unwrap();
//! assert_eq!(stems, vec!["run", "fli"]);
//!
//! assert_eq!(stem_tokens(&["hopping"], &stemmer), vec!["hop"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::stem::Stemmer;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

pub mod pipeline;

pub use pipeline::PipelineAnalyzer;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for logs and error messages).
    fn name(&self) -> &str;

    /// Analyze the text and collect only the token texts.
    fn analyze_to_strings(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}

/// Stem each token in order.
pub fn stem_tokens<S: AsRef<str>>(tokens: &[S], stemmer: &dyn Stemmer) -> Vec<String> {
    tokens
        .iter()
        .map(|token| stemmer.stem(token.as_ref()))
        .collect()
}

/// Tokenize `text` and stem every token.
///
/// The tokenizer and stemmer are passed in explicitly so callers decide
/// which implementations to use.
pub fn tokenize(
    text: &str,
    tokenizer: &dyn Tokenizer,
    stemmer: &dyn Stemmer,
) -> Result<Vec<String>> {
    let tokens: Vec<String> = tokenizer.tokenize(text)?.map(|token| token.text).collect();
    Ok(stem_tokens(&tokens, stemmer))
}
