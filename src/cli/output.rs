//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexigraphArgs, OutputFormat};
use crate::corpus::CorpusStats;
use crate::error::Result;
use crate::hyponym::GraphSummary;

/// Plain-text rendering of a command result.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Result of exercise extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExercisesResult {
    pub source: String,
    pub exercises: Vec<String>,
}

/// Result of markup stripping.
#[derive(Debug, Serialize, Deserialize)]
pub struct CleanResult {
    pub source: String,
    pub text: String,
}

/// Corpus statistics for one file.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub source: String,
    #[serde(flatten)]
    pub stats: CorpusStats,
}

/// Stemmed tokens of one file.
#[derive(Debug, Serialize, Deserialize)]
pub struct StemResult {
    pub source: String,
    pub stemmer: String,
    pub stems: Vec<String>,
}

/// Accuracy of a tagged file against a reference.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccuracyResult {
    pub total: usize,
    pub correct: usize,
    pub accuracy: f64,
}

/// Summary of a hyponym graph.
#[derive(Debug, Serialize, Deserialize)]
pub struct HyponymsResult {
    pub node_count: usize,
    pub edge_count: usize,
    pub max_depth: usize,
    #[serde(flatten)]
    pub graph: GraphSummary,
}

/// Graphviz DOT text of a hyponym graph.
#[derive(Debug, Serialize, Deserialize)]
pub struct DotResult {
    pub start: String,
    pub dot: String,
}

impl HumanOutput for ExercisesResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} exercises in {}", self.exercises.len(), self.source)?;
        for (i, exercise) in self.exercises.iter().enumerate() {
            writeln!(out)?;
            writeln!(out, "[{}]", i + 1)?;
            writeln!(out, "{}", exercise.trim())?;
        }
        Ok(())
    }
}

impl HumanOutput for CleanResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.text)
    }
}

impl HumanOutput for StatsResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Source: {}", self.source)?;
        writeln!(out, "Tokens: {}", self.stats.token_count)?;
        writeln!(out, "Vocabulary: {}", self.stats.vocabulary_size)?;
        writeln!(out, "Lexical diversity: {:.4}", self.stats.lexical_diversity)?;
        if !self.stats.top_words.is_empty() {
            writeln!(out, "Most frequent words:")?;
            for word in &self.stats.top_words {
                writeln!(
                    out,
                    "  {:<20} {:>6} {:>7.2}%",
                    word.word, word.count, word.percentage
                )?;
            }
        }
        Ok(())
    }
}

impl HumanOutput for StemResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.stems.join(" "))
    }
}

impl HumanOutput for AccuracyResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "Accuracy: {:.4} ({}/{} labels match)",
            self.accuracy, self.correct, self.total
        )
    }
}

impl HumanOutput for HyponymsResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "Start: {}",
            self.graph.start.as_deref().unwrap_or("<none>")
        )?;
        writeln!(out, "Nodes: {}", self.node_count)?;
        writeln!(out, "Edges: {}", self.edge_count)?;
        writeln!(out, "Max depth: {}", self.max_depth)?;
        for (a, b) in &self.graph.edges {
            writeln!(out, "  {a} -- {b}")?;
        }
        Ok(())
    }
}

impl HumanOutput for DotResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{}", self.dot)
    }
}

/// Write a result in the requested format to `out`.
pub fn write_result<T: Serialize + HumanOutput>(
    out: &mut dyn Write,
    message: &str,
    result: &T,
    args: &LexigraphArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(out)?;
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

/// Write a result to standard output.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &LexigraphArgs,
) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_result(&mut handle, message, result, args)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn render<T: Serialize + HumanOutput>(result: &T, argv: &[&str]) -> String {
        let args = LexigraphArgs::parse_from(argv);
        let mut buf = Vec::new();
        write_result(&mut buf, "done", result, &args).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_human_accuracy() {
        let result = AccuracyResult {
            total: 4,
            correct: 2,
            accuracy: 0.5,
        };
        let text = render(&result, &["lexigraph", "accuracy", "a", "b"]);
        assert_eq!(text, "Accuracy: 0.5000 (2/4 labels match)\n");
    }

    #[test]
    fn test_verbose_prints_message() {
        let result = CleanResult {
            source: "page.html".to_string(),
            text: " Hello ".to_string(),
        };
        let text = render(&result, &["lexigraph", "-v", "clean", "page.html"]);
        assert_eq!(text, "done\n\n Hello \n");
    }

    #[test]
    fn test_dot_follows_output_format() {
        let result = DotResult {
            start: "entity".to_string(),
            dot: "graph \"hyponyms\" {\n}\n".to_string(),
        };

        let text = render(&result, &["lexigraph", "hyponyms", "o.tsv", "entity", "--dot"]);
        assert_eq!(text, "graph \"hyponyms\" {\n}\n");

        let text = render(
            &result,
            &["lexigraph", "-f", "json", "hyponyms", "o.tsv", "entity", "--dot"],
        );
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["start"], "entity");
        assert_eq!(value["dot"], "graph \"hyponyms\" {\n}\n");

        let text = render(
            &result,
            &["lexigraph", "-f", "json", "--pretty", "hyponyms", "o.tsv", "entity", "--dot"],
        );
        assert!(text.contains("\n  \"dot\": "));
    }

    #[test]
    fn test_json_output() {
        let result = StemResult {
            source: "corpus.txt".to_string(),
            stemmer: "porter".to_string(),
            stems: vec!["run".to_string(), "fli".to_string()],
        };
        let text = render(&result, &["lexigraph", "-f", "json", "stem", "corpus.txt"]);
        assert_eq!(
            text,
            "{\"source\":\"corpus.txt\",\"stemmer\":\"porter\",\"stems\":[\"run\",\"fli\"]}\n"
        );
    }
}
