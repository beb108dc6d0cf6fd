//! Runtime configuration for the text utilities and the CLI.
//!
//! Configuration is read from a JSON file; every field is optional and
//! falls back to [`LexigraphConfig::default`].
//!
//! ```json
//! {
//!   "exercise_pattern": "Exercice \\d",
//!   "tokenizer": "unicode_word",
//!   "stemmer": "porter",
//!   "lowercase": true,
//!   "top_words": 10
//! }
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::{
    IdentityStemmer, PorterStemmer, SimpleStemmer, StemFilter, Stemmer,
};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::{LexigraphError, Result};
use crate::extract::ExerciseExtractor;

/// Tokenizer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// [`RegexTokenizer`] with `token_pattern`.
    Regex,
    /// [`UnicodeWordTokenizer`].
    UnicodeWord,
    /// [`WhitespaceTokenizer`].
    Whitespace,
}

/// Stemmer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemmerKind {
    Porter,
    Simple,
    Identity,
}

/// Configuration for extraction and analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexigraphConfig {
    /// Regex marking the start of each exercise.
    pub exercise_pattern: String,

    /// Tokenizer used by `stats` and `stem`.
    pub tokenizer: TokenizerKind,

    /// Pattern for [`TokenizerKind::Regex`].
    pub token_pattern: String,

    /// Stemmer used by `stem`.
    pub stemmer: StemmerKind,

    /// Lowercase tokens before counting or stemming.
    pub lowercase: bool,

    /// Number of most frequent words reported by `stats`.
    pub top_words: usize,
}

impl Default for LexigraphConfig {
    fn default() -> Self {
        Self {
            exercise_pattern: ExerciseExtractor::DEFAULT_PATTERN.to_string(),
            tokenizer: TokenizerKind::UnicodeWord,
            token_pattern: RegexTokenizer::DEFAULT_PATTERN.to_string(),
            stemmer: StemmerKind::Porter,
            lowercase: true,
            top_words: 10,
        }
    }
}

impl LexigraphConfig {
    /// Load a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content).map_err(|e| {
            LexigraphError::config(format!("{}: {e}", path.display()))
        })?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured patterns compile and limits are sane.
    pub fn validate(&self) -> Result<()> {
        if self.top_words == 0 {
            return Err(LexigraphError::config("top_words must be at least 1"));
        }
        ExerciseExtractor::with_pattern(&self.exercise_pattern)?;
        if self.tokenizer == TokenizerKind::Regex {
            RegexTokenizer::with_pattern(&self.token_pattern)?;
        }
        Ok(())
    }

    /// Build the configured tokenizer.
    pub fn build_tokenizer(&self) -> Result<Arc<dyn Tokenizer>> {
        Ok(match self.tokenizer {
            TokenizerKind::Regex => Arc::new(RegexTokenizer::with_pattern(&self.token_pattern)?),
            TokenizerKind::UnicodeWord => Arc::new(UnicodeWordTokenizer::new()),
            TokenizerKind::Whitespace => Arc::new(WhitespaceTokenizer::new()),
        })
    }

    /// Build the configured stemmer.
    pub fn build_stemmer(&self) -> Arc<dyn Stemmer> {
        match self.stemmer {
            StemmerKind::Porter => Arc::new(PorterStemmer::new()),
            StemmerKind::Simple => Arc::new(SimpleStemmer::new()),
            StemmerKind::Identity => Arc::new(IdentityStemmer::new()),
        }
    }

    /// Analyzer producing the words counted by corpus statistics.
    pub fn word_analyzer(&self) -> Result<PipelineAnalyzer> {
        let mut analyzer = PipelineAnalyzer::new(self.build_tokenizer()?).with_name("words");
        if self.lowercase {
            analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
        }
        Ok(analyzer)
    }

    /// Analyzer producing stemmed words.
    pub fn stem_analyzer(&self) -> Result<PipelineAnalyzer> {
        Ok(self
            .word_analyzer()?
            .add_filter(Arc::new(StemFilter::with_stemmer(self.build_stemmer())))
            .with_name("stems"))
    }

    /// Exercise extractor using the configured pattern.
    pub fn exercise_extractor(&self) -> Result<ExerciseExtractor> {
        ExerciseExtractor::with_pattern(&self.exercise_pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::Analyzer;

    #[test]
    fn test_default_config_is_valid() {
        let config = LexigraphConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.exercise_pattern, r"Exercice \d");
        assert_eq!(config.stemmer, StemmerKind::Porter);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = LexigraphConfig::from_json(r#"{"stemmer": "simple", "top_words": 3}"#).unwrap();

        assert_eq!(config.stemmer, StemmerKind::Simple);
        assert_eq!(config.top_words, 3);
        assert_eq!(config.tokenizer, TokenizerKind::UnicodeWord);
        assert!(config.lowercase);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = LexigraphConfig::from_json(r#"{"stemer": "simple"}"#).unwrap_err();
        assert!(matches!(err, LexigraphError::Json(_)));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err =
            LexigraphConfig::from_json(r#"{"tokenizer": "regex", "token_pattern": "[a-"}"#)
                .unwrap_err();
        assert!(matches!(err, LexigraphError::Analysis(_)));

        let err = LexigraphConfig::from_json(r#"{"top_words": 0}"#).unwrap_err();
        assert!(matches!(err, LexigraphError::Config(_)));
    }

    #[test]
    fn test_stem_analyzer() {
        let config = LexigraphConfig::default();
        let analyzer = config.stem_analyzer().unwrap();

        assert_eq!(analyzer.name(), "stems");
        let stems = analyzer.analyze_to_strings("The Flies were RUNNING").unwrap();
        assert_eq!(stems, vec!["the", "fli", "were", "run"]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("lexigraph.json");
        std::fs::write(&path, r#"{"lowercase": false, "tokenizer": "whitespace"}"#).unwrap();

        let config = LexigraphConfig::load(&path).unwrap();
        assert!(!config.lowercase);
        assert_eq!(config.tokenizer, TokenizerKind::Whitespace);
    }
}
