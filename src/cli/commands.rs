//! Command implementations for the lexigraph CLI.

use std::fs;
use std::path::Path;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token_filter::stem::Stemmer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::LexigraphConfig;
use crate::corpus::{CorpusStats, accuracy};
use crate::error::Result;
use crate::extract::{ExerciseExtractor, PlainTextExtractor, TextExtractor, get_text};
use crate::hyponym::{HyponymGraph, HyponymGraphBuilder};
use crate::ontology::{ConceptNode, Ontology};

/// Execute a CLI command.
pub fn execute_command(args: LexigraphArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Exercises(exercise_args) => {
            let result = extract_exercises(exercise_args, &config)?;
            output_result("Exercises extracted", &result, &args)
        }
        Command::Clean(file_args) => {
            let result = clean_file(file_args)?;
            output_result("Markup removed", &result, &args)
        }
        Command::Stats(stats_args) => {
            let result = corpus_stats(stats_args, &config)?;
            output_result("Corpus statistics", &result, &args)
        }
        Command::Stem(file_args) => {
            let result = stem_file(file_args, &config)?;
            output_result("Stemmed tokens", &result, &args)
        }
        Command::Accuracy(accuracy_args) => {
            let result = score_accuracy(accuracy_args)?;
            output_result("Accuracy computed", &result, &args)
        }
        Command::Hyponyms(hyponym_args) => {
            let graph = build_hyponym_graph(hyponym_args)?;
            if hyponym_args.dot {
                let result = DotResult {
                    start: hyponym_args.start.clone(),
                    dot: graph.to_dot(),
                };
                output_result("Hyponym graph rendered", &result, &args)
            } else {
                let result = hyponyms_result(&graph);
                output_result("Hyponym graph built", &result, &args)
            }
        }
    }
}

/// Load the configuration named on the command line, or the defaults.
fn load_config(args: &LexigraphArgs) -> Result<LexigraphConfig> {
    match &args.config {
        Some(path) => LexigraphConfig::load(path),
        None => {
            log::debug!("no configuration file given, using defaults");
            Ok(LexigraphConfig::default())
        }
    }
}

/// Split a plain-text document into exercises.
pub fn extract_exercises(
    args: &ExercisesArgs,
    config: &LexigraphConfig,
) -> Result<ExercisesResult> {
    let extractor = match &args.pattern {
        Some(pattern) => ExerciseExtractor::with_pattern(pattern)?,
        None => config.exercise_extractor()?,
    };
    log::debug!("exercise marker: {}", extractor.pattern());

    let exercises = extractor.extract(&args.file, &PlainTextExtractor)?;
    Ok(ExercisesResult {
        source: args.file.display().to_string(),
        exercises,
    })
}

/// Strip markup from a file.
pub fn clean_file(args: &FileArgs) -> Result<CleanResult> {
    let text = get_text(&args.file)?;
    Ok(CleanResult {
        source: args.file.display().to_string(),
        text,
    })
}

/// Compute corpus statistics over the configured word analyzer.
pub fn corpus_stats(args: &StatsArgs, config: &LexigraphConfig) -> Result<StatsResult> {
    let text = if args.strip_markup {
        get_text(&args.file)?
    } else {
        PlainTextExtractor.extract_text(&args.file)?
    };

    let analyzer = config.word_analyzer()?;
    let words = analyzer.analyze_to_strings(&text)?;
    log::info!(
        "{} produced {} tokens from {}",
        analyzer.name(),
        words.len(),
        args.file.display()
    );

    let top = args.top.unwrap_or(config.top_words);
    let stats = CorpusStats::from_tokens(&words, top)?;
    Ok(StatsResult {
        source: args.file.display().to_string(),
        stats,
    })
}

/// Tokenize and stem a file.
pub fn stem_file(args: &FileArgs, config: &LexigraphConfig) -> Result<StemResult> {
    let text = PlainTextExtractor.extract_text(&args.file)?;
    let analyzer = config.stem_analyzer()?;
    let stems = analyzer.analyze_to_strings(&text)?;
    log::info!("stemmed {} tokens from {}", stems.len(), args.file.display());

    Ok(StemResult {
        source: args.file.display().to_string(),
        stemmer: config.build_stemmer().name().to_string(),
        stems,
    })
}

fn read_labels(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.split_whitespace().map(str::to_string).collect())
}

/// Score whitespace-separated labels against a reference.
pub fn score_accuracy(args: &AccuracyArgs) -> Result<AccuracyResult> {
    let reference = read_labels(&args.reference)?;
    let test = read_labels(&args.test)?;
    let score = accuracy(&reference, &test)?;
    let correct = reference.iter().zip(&test).filter(|(r, t)| r == t).count();

    Ok(AccuracyResult {
        total: reference.len(),
        correct,
        accuracy: score,
    })
}

/// Load an ontology and build the hyponym graph below the start concept.
pub fn build_hyponym_graph(args: &HyponymsArgs) -> Result<HyponymGraph> {
    let ontology = Ontology::load(&args.ontology)?;
    let start = ontology.concept(args.start.as_str());

    let mut builder = HyponymGraphBuilder::new().reject_cycles(args.strict);
    if let Some(max_depth) = args.max_depth {
        builder = builder.max_depth(max_depth);
    }

    let graph = builder.build(&start)?;
    log::info!(
        "hyponym graph below '{}': {} nodes, {} edges",
        start.name(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn hyponyms_result(graph: &HyponymGraph) -> HyponymsResult {
    HyponymsResult {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        max_depth: graph.depths().values().copied().max().unwrap_or(0),
        graph: graph.summary(),
    }
}
