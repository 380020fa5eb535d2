//! Bounded reads and atomic, locked writes

use std::fs;
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::constants::MAX_RESOURCE_SIZE;
use crate::{Error, Result};

/// Read a text file, rejecting anything above [`MAX_RESOURCE_SIZE`].
///
/// Returns `Ok(None)` when the file does not exist so callers can decide
/// whether absence is an error.
pub fn read_text_if_exists(path: &Path) -> Result<Option<String>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::io(path, e)),
    };

    // Checked after reading so there is no window between stat and read.
    let size = content.len() as u64;
    if size > MAX_RESOURCE_SIZE {
        return Err(Error::ResourceTooLarge {
            path: path.display().to_string(),
            size,
            max: MAX_RESOURCE_SIZE,
        });
    }

    Ok(Some(content))
}

/// Read a text file that must exist.
pub fn read_text(path: &Path) -> Result<String> {
    read_text_if_exists(path)?.ok_or_else(|| {
        Error::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        )
    })
}

/// Replace `path` with `content` in one step.
///
/// The bytes go to a locked temp file next to `path`, which is then
/// persisted over it. On any failure the temp file is removed and `path`
/// keeps its old content.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            parent
        }
        None => Path::new("."),
    };

    let mut staged = tempfile::Builder::new()
        .prefix(".wrench-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| Error::io(dir, e))?;
    staged.as_file().lock_exclusive().map_err(|_| Error::LockFailed {
        path: staged.path().to_path_buf(),
    })?;

    staged
        .write_all(content)
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|e| Error::io(staged.path(), e))?;

    staged.persist(path).map_err(|e| Error::io(path, e.error))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file");
    Ok(())
}
