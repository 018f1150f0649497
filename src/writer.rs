use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::plan::errors::PatchError;

/// Replace `path` with `contents` by writing a sibling temporary file and
/// renaming it over the original. The temporary file is removed on every
/// error path when it is dropped.
///
/// Symlinks are resolved first so the link stays and its target is replaced.
/// Permissions carry over; ownership becomes that of the calling user.
pub fn write_atomic(path: &Path, contents: &str) -> Result<usize, PatchError> {
    let fail = |reason: String| PatchError::FileWriteFailure {
        path: path.display().to_string(),
        reason,
    };

    let target = std::fs::canonicalize(path)
        .map_err(|e| fail(format!("cannot resolve target: {}", e)))?;
    let dir = target.parent().unwrap_or_else(|| Path::new("/"));

    let permissions = std::fs::metadata(&target)
        .map_err(|e| fail(format!("cannot stat target: {}", e)))?
        .permissions();
    if permissions.readonly() {
        return Err(fail("target is read-only".to_string()));
    }

    let mut temp = NamedTempFile::new_in(dir)
        .map_err(|e| fail(format!("cannot create temporary file: {}", e)))?;
    log::debug!("Staging plan in {}", temp.path().display());

    temp.write_all(contents.as_bytes())
        .map_err(|e| fail(e.to_string()))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| fail(e.to_string()))?;
    std::fs::set_permissions(temp.path(), permissions)
        .map_err(|e| fail(format!("cannot copy permissions: {}", e)))?;

    temp.persist(&target)
        .map_err(|e| fail(format!("cannot replace target: {}", e.error)))?;

    Ok(contents.len())
}
