//! Error types for colony persistence.
//!
//! All variants are recoverable and reported as values: the host
//! informs the user and the engine keeps its prior state. Invariant
//! violations (rule indexing escaping the grid, mismatched buffer
//! dimensions) are programming defects and panic instead; they cannot occur
//! through the public contract.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColonyError {
    #[error("nothing to save: every cell is dead")]
    EmptyState,

    #[error("corrupt snapshot: {0}")]
    CorruptState(String),

    #[error("malformed snapshot bytes: {0}")]
    Malformed(#[from] serde_json::Error),
}
