//! Integration tests for hyponym graph construction over loaded ontologies

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fs;

use lexigraph::error::{LexigraphError, Result};
use lexigraph::hyponym::{GraphSummary, HyponymGraph, HyponymGraphBuilder, hyponym_graph};
use lexigraph::ontology::{ConceptNode, Ontology};
use tempfile::TempDir;

fn reference_ontology() -> Ontology {
    let mut ontology = Ontology::new();
    ontology.add_hyponym("entity", "object");
    ontology.add_hyponym("entity", "abstraction");
    ontology.add_hyponym("object", "organism");
    ontology
}

/// A larger ontology with a shared hyponym, a cycle and a self reference.
fn tangled_ontology() -> Ontology {
    let mut ontology = Ontology::new();
    for (parent, child) in [
        ("animal", "mammal"),
        ("animal", "bird"),
        ("mammal", "dog"),
        ("mammal", "bat"),
        ("bird", "bat"),
        ("dog", "puppy"),
        ("puppy", "dog"),
        ("bird", "bird"),
        ("bat", "fruit_bat"),
    ] {
        ontology.add_hyponym(parent, child);
    }
    ontology
}

fn is_connected(graph: &HyponymGraph, start: &str) -> bool {
    let mut seen: HashSet<&str> = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(name) = queue.pop_front() {
        for next in graph.neighbors(name) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen.len() == graph.node_count()
}

#[test]
fn test_reference_scenario() -> Result<()> {
    let ontology = reference_ontology();
    let graph = hyponym_graph(&ontology.concept("entity"))?;

    let nodes: BTreeSet<&str> = graph.nodes().collect();
    assert_eq!(
        nodes,
        BTreeSet::from(["entity", "object", "abstraction", "organism"])
    );

    let expected_edges: BTreeSet<(String, String)> = [
        ("abstraction", "entity"),
        ("entity", "object"),
        ("object", "organism"),
    ]
    .into_iter()
    .map(|(a, b)| (a.to_string(), b.to_string()))
    .collect();
    assert_eq!(graph.edge_set(), expected_edges);

    assert_eq!(graph.depth("entity"), Some(0));
    assert_eq!(graph.depth("object"), Some(1));
    assert_eq!(graph.depth("abstraction"), Some(1));
    assert_eq!(graph.depth("organism"), Some(2));
    Ok(())
}

#[test]
fn test_build_is_idempotent() -> Result<()> {
    let ontology = tangled_ontology();
    let start = ontology.concept("animal");

    let first = hyponym_graph(&start)?;
    let second = hyponym_graph(&start)?;

    assert_eq!(
        first.nodes().collect::<BTreeSet<_>>(),
        second.nodes().collect::<BTreeSet<_>>()
    );
    assert_eq!(first.edge_set(), second.edge_set());
    assert_eq!(first.depths(), second.depths());
    Ok(())
}

#[test]
fn test_tangled_ontology_invariants() -> Result<()> {
    let ontology = tangled_ontology();
    let graph = hyponym_graph(&ontology.concept("animal"))?;

    assert!(is_connected(&graph, "animal"));
    for (a, b) in graph.edges() {
        assert_ne!(a, b, "self-loop on {a}");
    }

    // Every node's depth is its distance to the start in the ontology.
    for name in graph.nodes() {
        let expected = ontology.distance(name, "animal");
        assert_eq!(graph.depth(name), expected, "depth of {name}");
    }

    // Shared hyponym appears once with both parents.
    assert_eq!(graph.neighbors("bat"), vec!["bird", "fruit_bat", "mammal"]);
    // Cycle dog <-> puppy collapses into a single undirected edge.
    assert!(graph.contains_edge("puppy", "dog"));
    assert_eq!(graph.degree("puppy"), 1);
    Ok(())
}

#[test]
fn test_strict_mode_rejects_cycle() {
    let ontology = tangled_ontology();
    let result = HyponymGraphBuilder::new()
        .reject_cycles(true)
        .build(&ontology.concept("animal"));

    match result {
        Err(LexigraphError::CycleDetected { concept }) => assert_eq!(concept, "dog"),
        other => panic!("expected a cycle error, got {other:?}"),
    }
}

#[test]
fn test_strict_mode_accepts_acyclic_ontology() -> Result<()> {
    let ontology = reference_ontology();
    let graph = HyponymGraphBuilder::new()
        .reject_cycles(true)
        .build(&ontology.concept("entity"))?;

    assert_eq!(graph.node_count(), 4);
    Ok(())
}

#[test]
fn test_max_depth_limits_expansion() -> Result<()> {
    let ontology = reference_ontology();
    let graph = HyponymGraphBuilder::new()
        .max_depth(1)
        .build(&ontology.concept("entity"))?;

    assert!(graph.contains_node("object"));
    assert!(!graph.contains_node("organism"));
    assert_eq!(graph.edge_count(), 2);
    Ok(())
}

#[test]
fn test_start_below_the_root() -> Result<()> {
    let ontology = reference_ontology();
    let graph = hyponym_graph(&ontology.concept("object"))?;

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.depth("object"), Some(0));
    assert_eq!(graph.depth("organism"), Some(1));
    assert!(!graph.contains_node("entity"));
    Ok(())
}

#[test]
fn test_graph_from_json_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ontology.json");
    fs::write(
        &path,
        r#"{"hyponyms": {"entity": ["object", "abstraction"], "object": ["organism"]}}"#,
    )?;

    let ontology = Ontology::load(&path)?;
    let start = ontology.concept("entity");
    assert_eq!(start.name(), "entity");

    let graph = hyponym_graph(&start)?;
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    Ok(())
}

#[test]
fn test_malformed_tsv_is_a_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ontology.tsv");
    fs::write(&path, "entity\tobject\nbroken line\n").unwrap();

    let err = Ontology::load(&path).unwrap_err();
    assert!(matches!(err, LexigraphError::Config(_)));
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_summary_serializes() -> Result<()> {
    let ontology = reference_ontology();
    let graph = hyponym_graph(&ontology.concept("entity"))?;

    let json = serde_json::to_string(&graph.summary())?;
    let summary: GraphSummary = serde_json::from_str(&json)?;

    assert_eq!(summary, graph.summary());
    assert_eq!(summary.start.as_deref(), Some("entity"));
    assert_eq!(summary.depth["organism"], 2);
    Ok(())
}

#[test]
fn test_dot_export() -> Result<()> {
    let ontology = reference_ontology();
    let dot = hyponym_graph(&ontology.concept("entity"))?.to_dot();

    assert!(dot.starts_with("graph \"hyponyms\" {\n"));
    assert!(dot.ends_with("}\n"));
    assert!(dot.contains(
        "  \"entity\" [depth=0, width=0.4444, colorscheme=blues9, color=1];"
    ));
    assert!(dot.contains(
        "  \"organism\" [depth=2, width=0.2222, colorscheme=blues9, color=3];"
    ));
    assert!(dot.contains("  \"object\" -- \"organism\";"));
    Ok(())
}
