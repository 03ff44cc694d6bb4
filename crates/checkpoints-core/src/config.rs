/// Configuration for a checkpoint store.
///
/// A plain value object with defaults applied before construction; callers
/// override fields as needed and hand the result to the store.
#[derive(Debug, Clone)]
pub struct CheckpointConfig {
    /// Directory name in which checkpoint files are kept.
    ///
    /// Resolved relative to each document's own directory, not the root.
    pub checkpoint_dir: String,

    /// Maximum number of checkpoint slots per document.
    pub max_checkpoints: usize,

    /// If the pool is full and the most recent checkpoint is younger than
    /// this, a new checkpoint overwrites it instead of evicting the oldest.
    pub debounce_seconds: u64,
}

impl Default for CheckpointConfig {
    fn default() -> Self {
        Self {
            checkpoint_dir: ".checkpoints".to_string(),
            max_checkpoints: 5,
            debounce_seconds: 60,
        }
    }
}
