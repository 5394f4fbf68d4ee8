//! Atomic I/O operations

use std::fs;
use std::io::{ErrorKind, Write};

use tempfile::NamedTempFile;

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file.
///
/// The content goes to a temporary file in the target's directory (same
/// filesystem), is flushed to disk, and then renamed over the target. If
/// any step fails the temporary file is removed on drop and the target is
/// left as it was.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    let parent = match native_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::path::PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|e| Error::io(&parent, e))?;

    let mut temp_file = NamedTempFile::new_in(&parent).map_err(|e| Error::io(&parent, e))?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_file.path(), e))?;

    // Temp files are created 0600; keep the mode of the file being replaced.
    if let Ok(metadata) = fs::metadata(&native_path) {
        fs::set_permissions(temp_file.path(), metadata.permissions())
            .map_err(|e| Error::io(temp_file.path(), e))?;
    }

    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| Error::io(temp_file.path(), e))?;

    temp_file
        .persist(&native_path)
        .map_err(|e| Error::Persist {
            path: native_path.clone(),
            source: e.error,
        })?;

    tracing::debug!(path = %path, bytes = content.len(), "Wrote file atomically");
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content from a file that is allowed to be absent.
///
/// Returns `Ok(None)` when the file does not exist; every other failure is
/// still an error.
pub fn read_optional_text(path: &NormalizedPath) -> Result<Option<String>> {
    let native_path = path.to_native();
    match fs::read_to_string(&native_path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
