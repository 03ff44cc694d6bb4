use std::path::{Path, PathBuf};

use doc_checkpoints_core::DocumentStore;

use crate::paths::normalize;

/// Document store rooted at a single directory: a logical path maps straight
/// onto the directory tree under the root.
#[derive(Debug, Clone)]
pub struct LocalDocuments {
    root_dir: PathBuf,
}

impl LocalDocuments {
    pub fn new(root_dir: impl AsRef<Path>) -> Self {
        Self {
            root_dir: root_dir.as_ref().to_path_buf(),
        }
    }
}

impl DocumentStore for LocalDocuments {
    fn os_path(&self, path: &str) -> PathBuf {
        self.root_dir.join(normalize(path))
    }
}
