//! Checkpoint error types.

use crate::builder::DefinitionError;
use thiserror::Error;

/// Errors raised while encoding, decoding or resuming a [`Checkpoint`](super::Checkpoint).
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The JSON text is malformed or is not a checkpoint.
    #[error("checkpoint JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The bincode payload is truncated or is not a checkpoint.
    #[error("checkpoint binary error: {0}")]
    Binary(#[from] bincode::Error),

    /// Written by a checkpoint format this build cannot read.
    #[error("checkpoint format version {found} cannot be read (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// A captured state is not a state of the definition being resumed against.
    #[error("checkpoint does not match definition: {0}")]
    Definition(#[from] DefinitionError),
}
