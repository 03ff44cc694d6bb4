//! Core traits and types for document checkpoint storage.
//!
//! This crate defines the abstractions shared by checkpoint store implementations:
//! - `ContentTransfer`: how document content moves into checkpoint files
//! - `DocumentStore`: resolution of logical document paths to storage locations
//! - `CheckpointRecord` and the content model
//! - `CheckpointError`: the error taxonomy surfaced to callers

mod config;
mod documents;
mod error;
mod model;
mod transfer;

pub use config::CheckpointConfig;
pub use documents::DocumentStore;
pub use error::CheckpointError;
pub use model::{CheckpointRecord, ContentFormat, ContentSource, FileContent};
pub use transfer::ContentTransfer;
