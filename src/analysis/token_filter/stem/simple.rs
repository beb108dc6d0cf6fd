//! Suffix-stripping stemmer.

use super::Stemmer;

const DEFAULT_SUFFIXES: &[&str] = &[
    "ing", "ed", "er", "est", "ly", "s", "es", "ies", "ied", "tion", "sion", "able", "ible",
    "ment", "ness", "ful",
];

/// Stemmer that removes the longest matching suffix from a fixed list.
///
/// Words of three characters or fewer are only lowercased, and a suffix is
/// removed only when at least three characters remain.
#[derive(Debug, Clone)]
pub struct SimpleStemmer {
    /// Suffixes sorted longest first.
    suffixes: Vec<String>,
}

impl SimpleStemmer {
    /// Create a stemmer with the default English suffix list.
    pub fn new() -> Self {
        Self::with_suffixes(DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect())
    }

    /// Create a simple stemmer with custom suffixes.
    pub fn with_suffixes(mut suffixes: Vec<String>) -> Self {
        suffixes.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
        SimpleStemmer { suffixes }
    }
}

impl Default for SimpleStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for SimpleStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        let len = word.chars().count();

        if len <= 3 {
            return word;
        }

        self.suffixes
            .iter()
            .find(|suffix| len > suffix.chars().count() + 2 && word.ends_with(suffix.as_str()))
            .map(|suffix| word[..word.len() - suffix.len()].to_string())
            .unwrap_or(word)
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}
