use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use crate::utils::{OptimizerError, OptimizerResult, PathError};

/// Get file size in bytes
pub fn get_file_size(path: impl AsRef<Path>) -> OptimizerResult<u64> {
    std::fs::metadata(path.as_ref())
        .map(|m| m.len())
        .map_err(|e| OptimizerError::io(format!("Failed to get file size: {}", e)))
}

/// Checks that `path` names an existing regular file.
pub fn validate_input_path(path: impl AsRef<Path>) -> Result<(), PathError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PathError::NotFound(path.to_path_buf()));
    }

    if !path.is_file() {
        return Err(PathError::NotFile(path.to_path_buf()));
    }

    Ok(())
}

/// Replaces the contents of the existing file at `path` with `bytes`.
///
/// The bytes land in a temp file next to the real file and are renamed over
/// it, so a failed write leaves the previous contents in place. Symlinks are
/// followed and the file keeps its permissions.
pub fn write_atomically(path: impl AsRef<Path>, bytes: &[u8]) -> OptimizerResult<()> {
    let target = std::fs::canonicalize(path.as_ref())
        .map_err(|e| OptimizerError::io(format!("Cannot resolve {}: {e}", path.as_ref().display())))?;
    let permissions = std::fs::metadata(&target)?.permissions();
    let parent = target.parent().unwrap_or(Path::new("."));

    let mut tmp = NamedTempFile::new_in(parent)
        .map_err(|e| OptimizerError::io(format!("Cannot create temp file in {}: {e}", parent.display())))?;
    tmp.write_all(bytes)?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.as_file().sync_all()?;
    tmp.persist(&target)
        .map_err(|e| OptimizerError::io(format!("Cannot replace {}: {}", target.display(), e.error)))?;

    Ok(())
}
