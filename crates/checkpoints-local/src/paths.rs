use std::path::{Path, PathBuf};

use doc_checkpoints_core::CheckpointError;

use crate::fsio;

/// Strip leading and trailing separators from a logical document path.
pub(crate) fn normalize(path: &str) -> &str {
    path.trim_matches('/')
}

/// Split a bare file name into base and extension. A dot at position 0 marks
/// a hidden file, not an extension.
fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(i) if i > 0 => name.split_at(i),
        _ => (name, ""),
    }
}

/// Derives on-disk checkpoint file locations.
///
/// Checkpoint files live in a subdirectory next to the documents they
/// snapshot, named `{base}-{checkpoint_id}{ext}`. The naming convention is
/// part of the external contract; other tools recognize these files by it.
#[derive(Debug, Clone)]
pub struct CheckpointPaths {
    root_dir: PathBuf,
    checkpoint_dir: String,
}

impl CheckpointPaths {
    pub fn new(root_dir: impl AsRef<Path>, checkpoint_dir: impl Into<String>) -> Self {
        Self {
            root_dir: root_dir.as_ref().to_path_buf(),
            checkpoint_dir: checkpoint_dir.into(),
        }
    }

    /// Resolve the checkpoint file path for one slot of one document,
    /// ensuring the checkpoint directory exists. Does not guarantee the file
    /// itself exists.
    pub async fn checkpoint_path(
        &self,
        checkpoint_id: &str,
        path: &str,
    ) -> Result<PathBuf, CheckpointError> {
        let path = normalize(path);
        let (parent, name) = match path.rsplit_once('/') {
            Some((parent, name)) => (parent, name),
            None => ("", path),
        };
        let (base, ext) = split_name(name);

        let mut cp_dir = self.root_dir.clone();
        if !parent.is_empty() {
            cp_dir.push(parent);
        }
        cp_dir.push(&self.checkpoint_dir);
        fsio::ensure_dir(&cp_dir).await?;

        Ok(cp_dir.join(format!("{}-{}{}", base, checkpoint_id, ext)))
    }
}
