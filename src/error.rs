// src/error.rs
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TaxonomyError>;

/// Errors raised while loading or saving a taxonomy.
///
/// Estimation itself has no error path: unknown words and senses with no
/// classifiable ancestry degrade to a 0.0 contribution instead of failing.
#[derive(Error, Debug)]
pub enum TaxonomyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Binary (de)serialization error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate sense name '{0}' in taxonomy source")]
    DuplicateSense(String),

    #[error("Unknown sense name '{0}' referenced in taxonomy source")]
    UnknownSense(String),

    #[error("Hypernym cycle through sense '{0}'")]
    HypernymCycle(String),

    #[error("Dictionary format version mismatch (expected {expected}, found {found})")]
    VersionMismatch { expected: u32, found: u32 },
}
