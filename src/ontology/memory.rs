//! In-memory hyponym relation with JSON and TSV loaders.
//!
//! ```
//! use lexigraph::ontology::{ConceptNode, Ontology};
//!
//! let mut ontology = Ontology::new();
//! ontology.add_hyponym("entity", "object");
//! ontology.add_hyponym("object", "organism");
//!
//! let organism = ontology.concept("organism");
//! let entity = ontology.concept("entity");
//! assert_eq!(organism.shortest_path_distance(&entity), Some(2));
//! ```

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::fmt;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{LexigraphError, Result};
use crate::ontology::ConceptNode;

/// Links of one concept, in insertion order.
#[derive(Debug, Clone, Default)]
struct Links {
    hyponyms: Vec<String>,
    hypernyms: Vec<String>,
}

/// On-disk JSON layout: parent name to its direct hyponyms.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct OntologyFile {
    hyponyms: BTreeMap<String, Vec<String>>,
}

/// A hyponym relation held in memory.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    links: HashMap<String, Links>,
    link_count: usize,
    /// BFS results keyed by source concept; cleared on every mutation.
    distance_cache: RefCell<HashMap<String, Rc<HashMap<String, usize>>>>,
}

impl Ontology {
    /// Create an empty ontology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `child` is a direct hyponym of `parent`. Duplicate links
    /// are ignored.
    pub fn add_hyponym<P: Into<String>, C: Into<String>>(&mut self, parent: P, child: C) {
        let parent = parent.into();
        let child = child.into();
        self.distance_cache.get_mut().clear();

        let parent_links = self.links.entry(parent.clone()).or_default();
        if parent_links.hyponyms.contains(&child) {
            return;
        }
        parent_links.hyponyms.push(child.clone());
        self.links.entry(child).or_default().hypernyms.push(parent);
        self.link_count += 1;
    }

    /// Register a concept that has no links yet.
    pub fn add_concept<S: Into<String>>(&mut self, name: S) {
        self.distance_cache.get_mut().clear();
        self.links.entry(name.into()).or_default();
    }

    /// Number of known concepts.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Number of hyponym links.
    pub fn link_count(&self) -> usize {
        self.link_count
    }

    pub fn contains(&self, name: &str) -> bool {
        self.links.contains_key(name)
    }

    /// Handle on a concept. The name is resolved lazily, so a handle to an
    /// unknown name fails on first use.
    pub fn concept<S: Into<String>>(&self, name: S) -> Concept<'_> {
        Concept {
            ontology: self,
            name: name.into(),
        }
    }

    /// Handle on a concept, or `None` if the name is unknown.
    pub fn get(&self, name: &str) -> Option<Concept<'_>> {
        self.contains(name).then(|| self.concept(name))
    }

    /// Direct hyponyms of `name`.
    pub fn hyponyms_of(&self, name: &str) -> Result<&[String]> {
        self.links
            .get(name)
            .map(|links| links.hyponyms.as_slice())
            .ok_or_else(|| LexigraphError::lookup(format!("unknown concept '{name}'")))
    }

    /// Direct hypernyms of `name`.
    pub fn hypernyms_of(&self, name: &str) -> Result<&[String]> {
        self.links
            .get(name)
            .map(|links| links.hypernyms.as_slice())
            .ok_or_else(|| LexigraphError::lookup(format!("unknown concept '{name}'")))
    }

    /// Concepts without hypernyms, sorted by name.
    pub fn roots(&self) -> Vec<&str> {
        let mut roots: Vec<&str> = self
            .links
            .iter()
            .filter(|(_, links)| links.hypernyms.is_empty())
            .map(|(name, _)| name.as_str())
            .collect();
        roots.sort_unstable();
        roots
    }

    /// Number of links on the shortest path between `from` and `to`,
    /// following hyponym and hypernym links alike.
    ///
    /// The relation is symmetric, so distances are computed once per `to`
    /// and cached; a graph build asks for every node's distance to the same
    /// start concept.
    pub fn distance(&self, from: &str, to: &str) -> Option<usize> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        if from == to {
            return Some(0);
        }
        self.distances_from(to).get(from).copied()
    }

    /// Distances from `source` to every concept connected to it.
    pub fn distances_from(&self, source: &str) -> Rc<HashMap<String, usize>> {
        if let Some(cached) = self.distance_cache.borrow().get(source) {
            return Rc::clone(cached);
        }

        let distances = Rc::new(self.breadth_first(source));
        self.distance_cache
            .borrow_mut()
            .insert(source.to_string(), Rc::clone(&distances));
        distances
    }

    fn breadth_first(&self, source: &str) -> HashMap<String, usize> {
        let mut distances: HashMap<String, usize> = HashMap::new();
        if !self.contains(source) {
            return distances;
        }

        let mut seen: HashSet<&str> = HashSet::from([source]);
        let mut queue: VecDeque<(&str, usize)> = VecDeque::from([(source, 0)]);

        while let Some((name, dist)) = queue.pop_front() {
            distances.insert(name.to_string(), dist);
            let Some(links) = self.links.get(name) else {
                continue;
            };
            for next in links.hyponyms.iter().chain(&links.hypernyms) {
                if seen.insert(next.as_str()) {
                    queue.push_back((next.as_str(), dist + 1));
                }
            }
        }

        distances
    }

    /// Parse the JSON layout `{"hyponyms": {"parent": ["child", ...]}}`.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: OntologyFile = serde_json::from_str(content)?;
        let mut ontology = Self::new();
        for (parent, children) in file.hyponyms {
            ontology.add_concept(parent.clone());
            for child in children {
                ontology.add_hyponym(parent.clone(), child);
            }
        }
        Ok(ontology)
    }

    /// Parse `parent<TAB>child` lines. Blank lines and `#` comments are skipped.
    pub fn from_tsv_str(content: &str) -> Result<Self> {
        let mut ontology = Self::new();
        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.split('\t').map(str::trim).collect::<Vec<_>>().as_slice() {
                [parent, child] if !parent.is_empty() && !child.is_empty() => {
                    ontology.add_hyponym(*parent, *child);
                }
                _ => {
                    return Err(LexigraphError::config(format!(
                        "line {}: expected 'parent<TAB>child', got '{line}'",
                        number + 1
                    )));
                }
            }
        }
        Ok(ontology)
    }

    /// Load an ontology file; `.json` files use the JSON layout, anything
    /// else is read as TSV.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let ontology = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_tsv_str(&content)
        }
        .map_err(|e| LexigraphError::config(format!("{}: {e}", path.display())))?;

        log::info!(
            "loaded ontology from {} ({} concepts, {} links)",
            path.display(),
            ontology.len(),
            ontology.link_count()
        );
        Ok(ontology)
    }

    /// Serialize to the JSON layout accepted by [`Self::from_json_str`].
    pub fn to_json_string(&self) -> Result<String> {
        let hyponyms = self
            .links
            .iter()
            .filter(|(_, links)| !links.hyponyms.is_empty())
            .map(|(name, links)| (name.clone(), links.hyponyms.clone()))
            .collect();
        Ok(serde_json::to_string_pretty(&OntologyFile { hyponyms })?)
    }
}

/// A named concept inside an [`Ontology`].
#[derive(Clone)]
pub struct Concept<'a> {
    ontology: &'a Ontology,
    name: String,
}

impl Concept<'_> {
    /// Whether the name is known to the ontology.
    pub fn exists(&self) -> bool {
        self.ontology.contains(&self.name)
    }
}

impl ConceptNode for Concept<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn hyponyms(&self) -> Result<Vec<Self>> {
        Ok(self
            .ontology
            .hyponyms_of(&self.name)?
            .iter()
            .map(|child| self.ontology.concept(child.as_str()))
            .collect())
    }

    fn shortest_path_distance(&self, other: &Self) -> Option<usize> {
        self.ontology.distance(&self.name, &other.name)
    }
}

impl fmt::Debug for Concept<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Concept").field(&self.name).finish()
    }
}

impl fmt::Display for Concept<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl PartialEq for Concept<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.ontology, other.ontology) && self.name == other.name
    }
}

impl Eq for Concept<'_> {}
