// src/core/estimator.rs
use crate::core::taxonomy::LexicalDatabase;
use crate::core::types::SenseId;
use log::debug;

/// Name prefix of the root sense every concrete noun descends from.
const CONCRETE_NAME: &str = "physical_entity";
/// Name prefix of the root sense every abstract noun descends from.
const ABSTRACT_NAME: &str = "abstraction";

/// Estimates how abstract (vs. concrete) a noun's meaning is.
///
/// For each noun sense of a word the estimator walks the full hypernym
/// ancestry, counts the ancestors under the concrete and abstract roots,
/// and takes `abstract / (abstract + concrete)` as that sense's ratio.
/// The word's score is the unweighted mean of the ratios, always in
/// [0.0, 1.0].
///
/// There is no error path: an unknown word, an empty string, or a word
/// whose ancestry touches neither root all score 0.0. No information
/// reads as "concrete" by convention.
pub struct AbstractnessEstimator<D: LexicalDatabase> {
    db: D,
}

impl<D: LexicalDatabase> AbstractnessEstimator<D> {
    pub fn new(db: D) -> Self {
        Self { db }
    }

    /// The wrapped database, for callers that share one instance between
    /// estimation and persistence.
    pub fn database(&self) -> &D {
        &self.db
    }

    /// Estimates the abstractness of `word`. Case-insensitive, pure, and
    /// side-effect-free beyond read-only database queries.
    pub fn estimate(&self, word: &str) -> f64 {
        let word = word.to_lowercase();
        let senses = self.db.lookup_noun_senses(&word);
        if senses.is_empty() {
            debug!("no noun senses for '{}'", word);
            return 0.0;
        }

        let mut ratios: Vec<f64> = Vec::new();
        for &sense in &senses {
            let ancestry = self.hypernym_ancestry(sense);
            let concrete_count = self.count_prefixed(&ancestry, CONCRETE_NAME);
            let abstract_count = self.count_prefixed(&ancestry, ABSTRACT_NAME);
            // A sense whose ancestry reaches neither root carries no
            // signal and is left out of the mean entirely.
            if concrete_count + abstract_count != 0 {
                let ratio = abstract_count as f64 / (abstract_count + concrete_count) as f64;
                ratios.push(ratio);
            }
        }

        if ratios.is_empty() {
            0.0
        } else {
            ratios.iter().sum::<f64>() / ratios.len() as f64
        }
    }

    /// Every sense visited while expanding hypernym edges outward from
    /// `start`, the start sense included.
    ///
    /// An ancestor reachable along several paths of the DAG appears once
    /// per path. The multiplicity is kept: convergent ancestry weighs
    /// more in the ratio.
    fn hypernym_ancestry(&self, start: SenseId) -> Vec<SenseId> {
        let mut visited = Vec::new();
        let mut frontier = vec![start];
        while let Some(sense) = frontier.pop() {
            visited.push(sense);
            frontier.extend(self.db.parents_of(sense));
        }
        visited
    }

    fn count_prefixed(&self, senses: &[SenseId], prefix: &str) -> usize {
        senses
            .iter()
            .filter(|&&sense| self.db.name_of(sense).starts_with(prefix))
            .count()
    }
}
