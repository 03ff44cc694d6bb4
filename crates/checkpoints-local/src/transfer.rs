use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;

use doc_checkpoints_core::{
    CheckpointError, ContentFormat, ContentSource, ContentTransfer, DocumentStore, FileContent,
};

use crate::fsio;

/// Copy-based strategy: checkpoints mirror the live document's raw bytes.
#[derive(Clone)]
pub struct CopyTransfer {
    documents: Arc<dyn DocumentStore>,
}

impl CopyTransfer {
    pub fn new(documents: Arc<dyn DocumentStore>) -> Self {
        Self { documents }
    }

    /// Copy a checkpoint file's bytes back over the live document.
    pub(crate) async fn restore(&self, src: &Path, path: &str) -> Result<(), CheckpointError> {
        let dest = self.documents.os_path(path);
        fsio::perm_to_forbidden(&dest, fs::copy(src, &dest)).await?;
        Ok(())
    }
}

#[async_trait]
impl ContentTransfer for CopyTransfer {
    fn strategy_name(&self) -> &'static str {
        "copy"
    }

    async fn write_checkpoint(
        &self,
        path: &str,
        source: &ContentSource,
        dest: &Path,
    ) -> Result<(), CheckpointError> {
        match source {
            ContentSource::Live => {
                let src = self.documents.os_path(path);
                fsio::perm_to_forbidden(dest, fs::copy(&src, dest)).await?;
                Ok(())
            }
            _ => Err(CheckpointError::InvalidArgument(
                "copy strategy snapshots the live document only".to_string(),
            )),
        }
    }
}

/// Serialize-based strategy: checkpoints hold caller-supplied content.
///
/// Structured documents are written as pretty-printed JSON, raw files as-is;
/// both go through a temp file and rename so a checkpoint is never observed
/// half-written.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerializeTransfer;

impl SerializeTransfer {
    pub fn new() -> Self {
        Self
    }

    async fn write_atomic(dest: &Path, bytes: &[u8]) -> Result<(), CheckpointError> {
        let mut tmp = dest.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fsio::perm_to_forbidden(&tmp, fs::write(&tmp, bytes)).await?;
        fsio::perm_to_forbidden(dest, fs::rename(&tmp, dest)).await?;
        Ok(())
    }

    /// Parse a structured-document checkpoint.
    pub(crate) async fn read_document(
        &self,
        src: &Path,
    ) -> Result<serde_json::Value, CheckpointError> {
        let raw = fs::read_to_string(src)
            .await
            .map_err(|e| CheckpointError::Io(format!("{}: {}", src.display(), e)))?;
        serde_json::from_str(&raw).map_err(|e| {
            CheckpointError::Serialization(format!("failed to parse {}: {}", src.display(), e))
        })
    }

    /// Read a raw-file checkpoint, detecting its format.
    pub(crate) async fn read_file(&self, src: &Path) -> Result<FileContent, CheckpointError> {
        let bytes = fs::read(src)
            .await
            .map_err(|e| CheckpointError::Io(format!("{}: {}", src.display(), e)))?;
        let format = if std::str::from_utf8(&bytes).is_ok() {
            ContentFormat::Text
        } else {
            ContentFormat::Base64
        };
        Ok(FileContent { bytes, format })
    }
}

#[async_trait]
impl ContentTransfer for SerializeTransfer {
    fn strategy_name(&self) -> &'static str {
        "serialize"
    }

    async fn write_checkpoint(
        &self,
        path: &str,
        source: &ContentSource,
        dest: &Path,
    ) -> Result<(), CheckpointError> {
        match source {
            ContentSource::Document(doc) => {
                let json = serde_json::to_string_pretty(doc).map_err(|e| {
                    CheckpointError::Serialization(format!("failed to serialize {}: {}", path, e))
                })?;
                Self::write_atomic(dest, json.as_bytes()).await
            }
            ContentSource::File { bytes, .. } => Self::write_atomic(dest, bytes).await,
            ContentSource::Live => Err(CheckpointError::InvalidArgument(
                "serialize strategy requires caller-supplied content".to_string(),
            )),
        }
    }
}
