use std::path::PathBuf;

/// Resolution of logical document paths to their on-disk locations.
///
/// The checkpoint layer never reads or parses live documents itself; it only
/// needs to know where their bytes live so the copy strategy can mirror them.
pub trait DocumentStore: Send + Sync {
    /// Map a normalized logical path to the document's storage location.
    fn os_path(&self, path: &str) -> PathBuf;
}
