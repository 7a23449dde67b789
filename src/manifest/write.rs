//! Output file writing.

use std::fs;
use std::path::Path;

use crate::core::ManifestError;

/// Result of writing the generated module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// Existing file already had identical content.
    Unchanged,
}

/// Write `content` to `path`, creating parent directories.
///
/// Leaves the file untouched (including its mtime) when the content is
/// identical, so downstream watchers do not rebuild for nothing.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteOutcome, ManifestError> {
    if let Ok(existing) = fs::read(path)
        && existing == content.as_bytes()
    {
        return Ok(WriteOutcome::Unchanged);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| ManifestError::Io(parent.to_path_buf(), e))?;
    }

    fs::write(path, content).map_err(|e| ManifestError::Io(path.to_path_buf(), e))?;
    Ok(WriteOutcome::Written)
}
