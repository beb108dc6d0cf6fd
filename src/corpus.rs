//! Basic corpus statistics.
//!
//! # Examples
//!
//! ```
//! use lexigraph::corpus::{accuracy, lexical_diversity, percentage};
//!
//! assert_eq!(lexical_diversity(&["a", "b", "a", "b"]).unwrap(), 0.5);
//! assert_eq!(percentage(1, 4).unwrap(), 25.0);
//! assert_eq!(accuracy(&["ADJ", "N", "V", "N"], &["N", "N", "V", "ADJ"]).unwrap(), 0.5);
//! ```

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{LexigraphError, Result};

/// Ratio of distinct tokens to total tokens.
///
/// Fails on an empty corpus.
pub fn lexical_diversity<T: Eq + Hash>(tokens: &[T]) -> Result<f64> {
    if tokens.is_empty() {
        return Err(LexigraphError::invalid_argument(
            "lexical diversity of an empty corpus is undefined",
        ));
    }
    let distinct: HashSet<&T> = tokens.iter().collect();
    Ok(distinct.len() as f64 / tokens.len() as f64)
}

/// `100 * count / total`.
pub fn percentage(count: usize, total: usize) -> Result<f64> {
    if total == 0 {
        return Err(LexigraphError::invalid_argument(
            "percentage of a zero total is undefined",
        ));
    }
    Ok(100.0 * count as f64 / total as f64)
}

/// Fraction of positions where `test` equals `reference`.
///
/// Both lists must be non-empty and of the same length.
pub fn accuracy<T: PartialEq>(reference: &[T], test: &[T]) -> Result<f64> {
    if reference.len() != test.len() {
        return Err(LexigraphError::invalid_argument(
            "Lists must have the same length.",
        ));
    }
    if reference.is_empty() {
        return Err(LexigraphError::invalid_argument(
            "accuracy of empty lists is undefined",
        ));
    }
    let correct = reference
        .iter()
        .zip(test)
        .filter(|(expected, actual)| expected == actual)
        .count();
    Ok(correct as f64 / reference.len() as f64)
}

/// A word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
    /// Share of all tokens, in percent.
    pub percentage: f64,
}

/// Summary statistics over a token sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub token_count: usize,
    pub vocabulary_size: usize,
    pub lexical_diversity: f64,
    /// Most frequent words, highest count first, ties in alphabetical order.
    pub top_words: Vec<WordFrequency>,
}

impl CorpusStats {
    /// Compute statistics, keeping the `top_n` most frequent words.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], top_n: usize) -> Result<Self> {
        let words: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
        let lexical_diversity = lexical_diversity(&words)?;

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for &word in &words {
            *counts.entry(word).or_insert(0) += 1;
        }
        let vocabulary_size = counts.len();

        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let top_words = ranked
            .into_iter()
            .take(top_n)
            .map(|(word, count)| {
                Ok(WordFrequency {
                    word: word.to_string(),
                    count,
                    percentage: percentage(count, words.len())?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CorpusStats {
            token_count: words.len(),
            vocabulary_size,
            lexical_diversity,
            top_words,
        })
    }
}
