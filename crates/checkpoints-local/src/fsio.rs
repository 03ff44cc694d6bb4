use std::future::Future;
use std::io;
use std::path::Path;

use doc_checkpoints_core::CheckpointError;

/// Await a filesystem operation on `path`, translating an OS permission
/// failure into `Forbidden`. Every other error becomes an unclassified `Io`
/// failure carrying the path. Mutating calls go through here so no raw
/// permission error ever escapes to the caller.
pub(crate) async fn perm_to_forbidden<T, F>(path: &Path, op: F) -> Result<T, CheckpointError>
where
    F: Future<Output = io::Result<T>>,
{
    op.await.map_err(|e| {
        if e.kind() == io::ErrorKind::PermissionDenied {
            CheckpointError::Forbidden {
                path: path.to_path_buf(),
            }
        } else {
            CheckpointError::Io(format!("{}: {}", path.display(), e))
        }
    })
}

/// Idempotent recursive directory creation inside the permission scope.
pub(crate) async fn ensure_dir(dir: &Path) -> Result<(), CheckpointError> {
    perm_to_forbidden(dir, tokio::fs::create_dir_all(dir)).await
}
