//! Text analysis for corpus work.
//!
//! Tokenizers split raw text into [`token::Token`]s, filters rewrite the
//! resulting stream (lowercasing, stemming), and analyzers chain the two.
//! The free functions [`analyzer::tokenize`] and [`analyzer::stem_tokens`]
//! take their tokenizer and stemmer as explicit arguments.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
