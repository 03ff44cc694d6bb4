use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the checkpoint layer.
///
/// `NotFound` and `Forbidden` are the only kinds operations promise to
/// classify; everything else (disk full, path too long, ...) surfaces as an
/// unclassified `Io` failure and is definitive on first occurrence.
#[derive(Error, Debug)]
pub enum CheckpointError {
    /// The referenced (document path, checkpoint id) pair has no checkpoint file.
    #[error("checkpoint does not exist: {path}@{checkpoint_id}")]
    NotFound { path: String, checkpoint_id: String },

    /// An OS permission check failed during a mutating operation.
    #[error("permission denied: {}", path.display())]
    Forbidden { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
