// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A unique identifier for a sense in the taxonomy.
pub type SenseId = usize;

/// A single noun sense: the node type of the taxonomy graph.
/// Hypernym edges point child -> parent and terminate at root senses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SenseNode {
    /// Canonical name in the `<category>.<pos>.<index>` convention,
    /// e.g. "physical_entity.n.01".
    pub name: String,
    /// Ids of the direct hypernyms. Empty for a root sense.
    pub parents: Vec<SenseId>,
}
