use std::path::Path;

use chrono::{DateTime, Utc};
use tokio::fs;
use tracing::{debug, instrument};

use doc_checkpoints_core::{
    CheckpointConfig, CheckpointError, CheckpointRecord, ContentSource, ContentTransfer,
    FileContent,
};

use crate::fsio;
use crate::paths::{normalize, CheckpointPaths};
use crate::slots::SlotAllocator;
use crate::transfer::{CopyTransfer, SerializeTransfer};

/// Bounded per-document checkpoint history on the local filesystem.
///
/// Composes the path resolver and slot allocator with a content transfer
/// strategy chosen at construction. For any document path the number of
/// checkpoint files never exceeds the configured pool size, and each
/// (path, slot) pair holds at most one file.
///
/// Operations assume a single logical owner per document path; concurrent
/// callers racing on the same (path, slot) are the calling layer's problem.
pub struct FileCheckpoints<T> {
    paths: CheckpointPaths,
    slots: SlotAllocator,
    transfer: T,
}

impl<T> FileCheckpoints<T> {
    pub fn new(root_dir: impl AsRef<Path>, config: CheckpointConfig, transfer: T) -> Self {
        Self {
            paths: CheckpointPaths::new(root_dir, config.checkpoint_dir),
            slots: SlotAllocator::new(config.max_checkpoints, config.debounce_seconds),
            transfer,
        }
    }
}

impl<T: ContentTransfer> FileCheckpoints<T> {
    /// Create (or overwrite) a checkpoint for `path` and return its record.
    ///
    /// The lowest free slot is used when one exists. On a full pool, a save
    /// within the debounce window overwrites the most recent checkpoint;
    /// otherwise the least recently modified one is evicted.
    #[instrument(skip(self, source), level = "debug")]
    pub async fn create(
        &self,
        path: &str,
        source: &ContentSource,
    ) -> Result<CheckpointRecord, CheckpointError> {
        let path = normalize(path);
        let checkpoint_id = self.select_slot(path).await?;
        let dest = self.paths.checkpoint_path(&checkpoint_id, path).await?;
        debug!("creating checkpoint {} for {}", checkpoint_id, path);
        self.transfer.write_checkpoint(path, source, &dest).await?;
        self.checkpoint_record(&checkpoint_id, &dest).await
    }

    /// Move a checkpoint from `old_path`'s slot to `new_path`'s slot, keeping
    /// the slot id. A document with no checkpoint in that slot is a silent
    /// no-op; partially empty pools make that the expected case.
    #[instrument(skip(self), level = "debug")]
    pub async fn rename(
        &self,
        checkpoint_id: &str,
        old_path: &str,
        new_path: &str,
    ) -> Result<(), CheckpointError> {
        let old_cp = self.paths.checkpoint_path(checkpoint_id, old_path).await?;
        if !file_exists(&old_cp).await {
            return Ok(());
        }
        let new_cp = self.paths.checkpoint_path(checkpoint_id, new_path).await?;
        debug!(
            "renaming checkpoint {} -> {}",
            old_cp.display(),
            new_cp.display()
        );
        fsio::perm_to_forbidden(&new_cp, fs::rename(&old_cp, &new_cp)).await?;
        Ok(())
    }

    /// Delete the checkpoint in `checkpoint_id`'s slot for `path`.
    #[instrument(skip(self), level = "debug")]
    pub async fn delete(&self, checkpoint_id: &str, path: &str) -> Result<(), CheckpointError> {
        let path = normalize(path);
        let cp_path = self.paths.checkpoint_path(checkpoint_id, path).await?;
        if !file_exists(&cp_path).await {
            return Err(missing(path, checkpoint_id));
        }
        debug!("unlinking {}", cp_path.display());
        fsio::perm_to_forbidden(&cp_path, fs::remove_file(&cp_path)).await?;
        Ok(())
    }

    /// All checkpoints for `path`, most recently modified first. Ties break
    /// by slot index, so the ordering is deterministic.
    #[instrument(skip(self), level = "debug")]
    pub async fn list(&self, path: &str) -> Result<Vec<CheckpointRecord>, CheckpointError> {
        let path = normalize(path);
        let mut indexed = Vec::new();
        for (index, checkpoint_id) in self.slots.slot_ids().iter().enumerate() {
            let cp_path = self.paths.checkpoint_path(checkpoint_id, path).await?;
            if file_exists(&cp_path).await {
                let record = self.checkpoint_record(checkpoint_id, &cp_path).await?;
                indexed.push((index, record));
            }
        }
        indexed.sort_by(|(ia, a), (ib, b)| {
            b.last_modified.cmp(&a.last_modified).then(ia.cmp(ib))
        });
        Ok(indexed.into_iter().map(|(_, record)| record).collect())
    }

    async fn select_slot(&self, path: &str) -> Result<String, CheckpointError> {
        let mut occupied = Vec::new();
        for checkpoint_id in self.slots.slot_ids() {
            let cp_path = self.paths.checkpoint_path(&checkpoint_id, path).await?;
            if file_exists(&cp_path).await {
                occupied.push(checkpoint_id);
            }
        }
        let free = self.slots.free_slots(&occupied);
        if let Some(id) = free.first() {
            return Ok(id.clone());
        }
        // Pool is full: the allocator decides between debounce and eviction
        // from the same newest-first ordering `list` exposes.
        let existing = self.list(path).await?;
        Ok(self.slots.select(&free, &existing, Utc::now()))
    }

    /// Build the record for a checkpoint file known to exist. A vanished file
    /// surfaces as the stat failure.
    async fn checkpoint_record(
        &self,
        checkpoint_id: &str,
        os_path: &Path,
    ) -> Result<CheckpointRecord, CheckpointError> {
        let metadata = fs::metadata(os_path)
            .await
            .map_err(|e| CheckpointError::Io(format!("{}: {}", os_path.display(), e)))?;
        let last_modified = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .map_err(|e| CheckpointError::Io(format!("{}: {}", os_path.display(), e)))?;
        Ok(CheckpointRecord {
            id: checkpoint_id.to_string(),
            last_modified,
        })
    }
}

impl FileCheckpoints<CopyTransfer> {
    /// Copy a checkpoint's bytes back over the live document's location.
    #[instrument(skip(self), level = "debug")]
    pub async fn restore(&self, checkpoint_id: &str, path: &str) -> Result<(), CheckpointError> {
        let path = normalize(path);
        let cp_path = self.paths.checkpoint_path(checkpoint_id, path).await?;
        if !file_exists(&cp_path).await {
            return Err(missing(path, checkpoint_id));
        }
        debug!("restoring {} from checkpoint {}", path, checkpoint_id);
        self.transfer.restore(&cp_path, path).await
    }
}

impl FileCheckpoints<SerializeTransfer> {
    /// Parsed structured document stored in a checkpoint.
    #[instrument(skip(self), level = "debug")]
    pub async fn retrieve_document(
        &self,
        checkpoint_id: &str,
        path: &str,
    ) -> Result<serde_json::Value, CheckpointError> {
        let path = normalize(path);
        let cp_path = self.paths.checkpoint_path(checkpoint_id, path).await?;
        if !file_exists(&cp_path).await {
            return Err(missing(path, checkpoint_id));
        }
        debug!("reading {} from checkpoint {}", path, checkpoint_id);
        self.transfer.read_document(&cp_path).await
    }

    /// Raw file content stored in a checkpoint, with its detected format.
    #[instrument(skip(self), level = "debug")]
    pub async fn retrieve_file(
        &self,
        checkpoint_id: &str,
        path: &str,
    ) -> Result<FileContent, CheckpointError> {
        let path = normalize(path);
        let cp_path = self.paths.checkpoint_path(checkpoint_id, path).await?;
        if !file_exists(&cp_path).await {
            return Err(missing(path, checkpoint_id));
        }
        debug!("reading {} from checkpoint {}", path, checkpoint_id);
        self.transfer.read_file(&cp_path).await
    }
}

fn missing(path: &str, checkpoint_id: &str) -> CheckpointError {
    CheckpointError::NotFound {
        path: path.to_string(),
        checkpoint_id: checkpoint_id.to_string(),
    }
}

async fn file_exists(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}
