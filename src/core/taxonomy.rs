// src/core/taxonomy.rs
use crate::core::types::{SenseId, SenseNode};
use crate::error::{Result, TaxonomyError};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// The query contract the estimator needs from a lexical database.
///
/// Implementations must present a read-only, acyclic hypernym graph:
/// `parents_of` edges always point toward more general senses and
/// terminate at senses with no parents.
pub trait LexicalDatabase {
    /// All noun senses whose surface form equals `surface` exactly.
    /// Callers lowercase before querying; implementations index
    /// lowercase surface forms.
    fn lookup_noun_senses(&self, surface: &str) -> Vec<SenseId>;

    /// The direct hypernym parents of a sense. Empty for a root.
    fn parents_of(&self, sense: SenseId) -> Vec<SenseId>;

    /// The canonical name of a sense.
    fn name_of(&self, sense: SenseId) -> &str;
}

/// An in-memory noun taxonomy: a dense sense store plus a surface-form
/// index mapping lowercase lemmas to their senses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Taxonomy {
    nodes: Vec<SenseNode>,
    lemma_index: HashMap<String, Vec<SenseId>>,
}

impl Taxonomy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sense_count(&self) -> usize {
        self.nodes.len()
    }

    /// Adds a sense and returns its id. `parents` must be ids returned by
    /// earlier `add_sense` calls, so hand-built taxonomies are acyclic by
    /// construction.
    pub fn add_sense(&mut self, name: &str, parents: &[SenseId]) -> SenseId {
        self.nodes.push(SenseNode {
            name: name.to_string(),
            parents: parents.to_vec(),
        });
        self.nodes.len() - 1
    }

    /// Registers `surface` as a lemma of `sense`. The surface form is
    /// lowercased before indexing.
    pub fn add_lemma(&mut self, surface: &str, sense: SenseId) {
        self.lemma_index
            .entry(surface.to_lowercase())
            .or_default()
            .push(sense);
    }

    /// Parses a taxonomy from its JSON source form:
    ///
    /// ```json
    /// {
    ///   "senses": [ { "name": "entity.n.01", "parents": [] }, ... ],
    ///   "lemmas": { "dog": ["dog.n.01"], ... }
    /// }
    /// ```
    ///
    /// Senses may reference parents declared later in the list. Duplicate
    /// sense names, unknown references, and hypernym cycles are load
    /// errors.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let source: TaxonomySource = serde_json::from_str(source)?;

        // Pass 1: allocate ids for every sense name.
        let mut ids_by_name: HashMap<&str, SenseId> = HashMap::new();
        for (id, sense) in source.senses.iter().enumerate() {
            if ids_by_name.insert(sense.name.as_str(), id).is_some() {
                return Err(TaxonomyError::DuplicateSense(sense.name.clone()));
            }
        }

        // Pass 2: resolve parent and lemma references.
        let mut taxonomy = Taxonomy::new();
        for sense in &source.senses {
            let mut parents = Vec::with_capacity(sense.parents.len());
            for parent_name in &sense.parents {
                let id = ids_by_name
                    .get(parent_name.as_str())
                    .ok_or_else(|| TaxonomyError::UnknownSense(parent_name.clone()))?;
                parents.push(*id);
            }
            taxonomy.nodes.push(SenseNode {
                name: sense.name.clone(),
                parents,
            });
        }
        taxonomy.check_acyclic()?;

        for (surface, sense_names) in &source.lemmas {
            for sense_name in sense_names {
                let id = ids_by_name
                    .get(sense_name.as_str())
                    .ok_or_else(|| TaxonomyError::UnknownSense(sense_name.clone()))?;
                taxonomy.add_lemma(surface, *id);
            }
        }

        info!(
            "loaded taxonomy source: {} senses, {} lemmas",
            taxonomy.nodes.len(),
            taxonomy.lemma_index.len()
        );
        Ok(taxonomy)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }

    /// Kahn's algorithm over the hypernym edges. JSON sources can express
    /// arbitrary graphs, and the estimator's walk would not terminate on a
    /// cyclic one.
    fn check_acyclic(&self) -> Result<()> {
        let mut unresolved_parents: Vec<usize> =
            self.nodes.iter().map(|node| node.parents.len()).collect();
        let mut children: Vec<Vec<SenseId>> = vec![Vec::new(); self.nodes.len()];
        for (id, node) in self.nodes.iter().enumerate() {
            for &parent in &node.parents {
                children[parent].push(id);
            }
        }

        let mut queue: Vec<SenseId> = (0..self.nodes.len())
            .filter(|&id| unresolved_parents[id] == 0)
            .collect();
        let mut resolved = 0;
        while let Some(id) = queue.pop() {
            resolved += 1;
            for &child in &children[id] {
                unresolved_parents[child] -= 1;
                if unresolved_parents[child] == 0 {
                    queue.push(child);
                }
            }
        }

        if resolved == self.nodes.len() {
            Ok(())
        } else {
            let culprit = (0..self.nodes.len())
                .find(|&id| unresolved_parents[id] > 0)
                .map(|id| self.nodes[id].name.clone())
                .unwrap_or_default();
            Err(TaxonomyError::HypernymCycle(culprit))
        }
    }
}

/// Raw shape of the JSON source format.
#[derive(Deserialize)]
struct TaxonomySource {
    senses: Vec<SenseSource>,
    #[serde(default)]
    lemmas: HashMap<String, Vec<String>>,
}

#[derive(Deserialize)]
struct SenseSource {
    name: String,
    #[serde(default)]
    parents: Vec<String>,
}

impl LexicalDatabase for Taxonomy {
    fn lookup_noun_senses(&self, surface: &str) -> Vec<SenseId> {
        self.lemma_index.get(surface).cloned().unwrap_or_default()
    }

    fn parents_of(&self, sense: SenseId) -> Vec<SenseId> {
        self.nodes[sense].parents.clone()
    }

    fn name_of(&self, sense: SenseId) -> &str {
        &self.nodes[sense].name
    }
}
