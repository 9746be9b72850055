// src/lib.rs

pub mod core;
pub mod error;
pub mod persistence;
pub mod sample;

pub use crate::core::estimator::AbstractnessEstimator;
pub use crate::core::taxonomy::{LexicalDatabase, Taxonomy};
pub use crate::core::types::{SenseId, SenseNode};
pub use crate::error::{Result, TaxonomyError};
