//! Exercise extraction and markup-stripped text loading.
//!
//! Word-processor formats are not parsed here: a [`TextExtractor`] turns a
//! document into plain text first, and [`ExerciseExtractor`] splits that
//! text on the exercise marker.
//!
//! ```
//! use lexigraph::extract::{ExerciseExtractor, clean_markup};
//!
//! let extractor = ExerciseExtractor::new().unwrap();
//! let exercises = extractor.split("Exercice 1 Conjuguer. Exercice 2 Traduire.");
//! assert_eq!(exercises, vec![" Conjuguer. ", " Traduire."]);
//!
//! assert_eq!(clean_markup("<p>Hello</p>\n\n<b>world</b>").unwrap(), " Hello world ");
//! ```

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::{LexigraphError, Result};

/// Source of plain text for a document path.
pub trait TextExtractor {
    /// Return the document's content as plain text.
    fn extract_text(&self, path: &Path) -> Result<String>;
}

/// Reads UTF-8 text files as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        let text = fs::read_to_string(path)?;
        log::debug!("read {} bytes from {}", text.len(), path.display());
        Ok(text)
    }
}

/// Splits document text into exercises on a marker pattern.
#[derive(Debug, Clone)]
pub struct ExerciseExtractor {
    marker: Regex,
}

impl ExerciseExtractor {
    /// Marker used by the course material: "Exercice" followed by a digit.
    pub const DEFAULT_PATTERN: &'static str = r"Exercice \d";

    /// Create an extractor using [`Self::DEFAULT_PATTERN`].
    pub fn new() -> Result<Self> {
        Self::with_pattern(Self::DEFAULT_PATTERN)
    }

    /// Create an extractor with a custom marker pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let marker = Regex::new(pattern).map_err(|e| {
            LexigraphError::analysis(format!("Invalid exercise pattern: {e}"))
        })?;
        Ok(Self { marker })
    }

    /// The marker pattern.
    pub fn pattern(&self) -> &str {
        self.marker.as_str()
    }

    /// Split `text` on every marker and drop the segments that are exactly
    /// empty. Whitespace-only segments are kept.
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.marker
            .split(text)
            .filter(|segment| !segment.is_empty())
            .collect()
    }

    /// Extract the document's text with `source`, then split it.
    pub fn extract<P: AsRef<Path>>(
        &self,
        path: P,
        source: &dyn TextExtractor,
    ) -> Result<Vec<String>> {
        let text = source.extract_text(path.as_ref())?;
        let exercises: Vec<String> = self.split(&text).into_iter().map(str::to_string).collect();
        log::info!(
            "extracted {} exercises from {}",
            exercises.len(),
            path.as_ref().display()
        );
        Ok(exercises)
    }
}

/// Removes `<...>` tags and collapses whitespace runs.
#[derive(Debug, Clone)]
pub struct MarkupCleaner {
    tag: Regex,
    whitespace: Regex,
}

impl MarkupCleaner {
    pub fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| LexigraphError::analysis(e.to_string()))
        };
        Ok(Self {
            tag: compile(r"<.*?>")?,
            whitespace: compile(r"\s+")?,
        })
    }

    /// Replace every tag with a space, then every whitespace run with a
    /// single space. Leading and trailing spaces are kept.
    pub fn clean(&self, text: &str) -> String {
        let without_tags = self.tag.replace_all(text, " ");
        self.whitespace.replace_all(&without_tags, " ").into_owned()
    }
}

/// Strip markup from `text`; see [`MarkupCleaner::clean`].
pub fn clean_markup(text: &str) -> Result<String> {
    Ok(MarkupCleaner::new()?.clean(text))
}

/// Read a file and strip its markup.
pub fn get_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let text = PlainTextExtractor.extract_text(path.as_ref())?;
    clean_markup(&text)
}
