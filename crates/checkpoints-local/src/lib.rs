//! Local filesystem checkpoint storage.
//!
//! Keeps a bounded history of point-in-time snapshots for each tracked
//! document in a checkpoint directory adjacent to the document:
//!
//! ```text
//! {root_dir}/
//!   report.txt
//!   .checkpoints/
//!     report-checkpoint0.txt
//!     report-checkpoint1.txt
//! ```
//!
//! Each document owns a fixed pool of slots (`checkpoint0..checkpoint{N-1}`).
//! New checkpoints take the lowest free slot; on a full pool, saves inside the
//! debounce window collapse into the most recent slot, and anything later
//! evicts the least recently modified one. Records are always derived from
//! file modification times, never stored separately.
//!
//! [`FileCheckpoints`] is parameterized by a content transfer strategy:
//! [`CopyTransfer`] mirrors the live document's bytes and supports `restore`;
//! [`SerializeTransfer`] writes caller-supplied content and supports the typed
//! `retrieve_*` reads.

mod documents;
mod fsio;
mod paths;
mod slots;
mod store;
mod transfer;

pub use documents::LocalDocuments;
pub use paths::CheckpointPaths;
pub use slots::SlotAllocator;
pub use store::FileCheckpoints;
pub use transfer::{CopyTransfer, SerializeTransfer};
