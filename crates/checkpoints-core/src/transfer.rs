use std::path::Path;

use async_trait::async_trait;

use crate::error::CheckpointError;
use crate::model::ContentSource;

/// Strategy for moving document content into a checkpoint file.
///
/// Two concrete strategies exist: copy-based, which mirrors the live file's
/// raw bytes, and serialize-based, which writes caller-supplied content. A
/// store is parameterized by one of them at construction; the store itself
/// never touches document content.
#[async_trait]
pub trait ContentTransfer: Send + Sync {
    /// Returns the strategy identifier (e.g., "copy", "serialize").
    fn strategy_name(&self) -> &'static str;

    /// Write the content described by `source` for document `path` into the
    /// checkpoint file at `dest`, overwriting any previous checkpoint there.
    async fn write_checkpoint(
        &self,
        path: &str,
        source: &ContentSource,
        dest: &Path,
    ) -> Result<(), CheckpointError>;
}
