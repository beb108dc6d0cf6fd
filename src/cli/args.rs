//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// lexigraph - corpus helpers and hyponym graphs
#[derive(Parser, Debug, Clone)]
#[command(name = "lexigraph")]
#[command(about = "Text-processing helpers and hyponym graphs for lexical ontologies")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexigraphArgs {
    /// Verbosity level (repeat for more: -v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, env = "LEXIGRAPH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexigraphArgs {
    /// Effective verbosity: 0 quiet, 1 normal, 2 verbose, 3+ debug.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Split a plain-text document into exercises
    Exercises(ExercisesArgs),

    /// Print a file with its markup removed and whitespace collapsed
    Clean(FileArgs),

    /// Show corpus statistics for a text file
    Stats(StatsArgs),

    /// Tokenize and stem a text file
    Stem(FileArgs),

    /// Compare a tagged file against a reference
    Accuracy(AccuracyArgs),

    /// Build the hyponym graph below a concept
    Hyponyms(HyponymsArgs),
}

/// Arguments for commands that read one file
#[derive(Parser, Debug, Clone)]
pub struct FileArgs {
    /// Input text file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for exercise extraction
#[derive(Parser, Debug, Clone)]
pub struct ExercisesArgs {
    /// Plain-text export of the exercise document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Marker pattern (overrides the configuration)
    #[arg(long)]
    pub pattern: Option<String>,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Input text file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of most frequent words to list (overrides the configuration)
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Strip markup before analysing
    #[arg(long)]
    pub strip_markup: bool,
}

/// Arguments for accuracy scoring
#[derive(Parser, Debug, Clone)]
pub struct AccuracyArgs {
    /// Whitespace-separated reference labels
    #[arg(value_name = "REFERENCE")]
    pub reference: PathBuf,

    /// Whitespace-separated labels to score
    #[arg(value_name = "TEST")]
    pub test: PathBuf,
}

/// Arguments for hyponym graph construction
#[derive(Parser, Debug, Clone)]
pub struct HyponymsArgs {
    /// Ontology file (.json, or parent<TAB>child lines)
    #[arg(value_name = "ONTOLOGY")]
    pub ontology: PathBuf,

    /// Start concept
    #[arg(value_name = "START")]
    pub start: String,

    /// Print Graphviz DOT instead of a summary
    #[arg(long)]
    pub dot: bool,

    /// Do not expand concepts at or beyond this depth
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Fail if the hyponym relation loops back on itself
    #[arg(long)]
    pub strict: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hyponyms() {
        let args = LexigraphArgs::parse_from([
            "lexigraph",
            "hyponyms",
            "wordnet.tsv",
            "entity",
            "--max-depth",
            "3",
            "--dot",
        ]);

        match args.command {
            Command::Hyponyms(h) => {
                assert_eq!(h.start, "entity");
                assert_eq!(h.max_depth, Some(3));
                assert!(h.dot);
                assert!(!h.strict);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = LexigraphArgs::parse_from(["lexigraph", "stats", "corpus.txt", "-f", "json", "-vv"]);

        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.verbosity(), 3);
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = LexigraphArgs::parse_from(["lexigraph", "-v", "-q", "clean", "page.html"]);
        assert_eq!(args.verbosity(), 0);
    }
}
