//! Errors raised while turning an asset directory into a manifest.

use std::path::PathBuf;
use thiserror::Error;

/// Manifest generation errors.
///
/// Every variant aborts the run before anything is written.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Extension matched no category.
    #[error("unknown file type: {0}")]
    UnknownFileType(String),

    #[error("asset directory not found: `{}`", .0.display())]
    AssetDirMissing(PathBuf),

    /// Paths go into the manifest as text, so they must be valid UTF-8.
    #[error("asset path is not valid UTF-8: `{}`", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("failed to scan `{}`", .0.display())]
    Scan(PathBuf, #[source] jwalk::Error),

    #[error("IO error when accessing `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_file_type_echoes_path() {
        let err = ManifestError::UnknownFileType("c.xyz".into());
        assert_eq!(err.to_string(), "unknown file type: c.xyz");
    }

    #[test]
    fn test_non_utf8_path_display() {
        let err = ManifestError::NonUtf8Path(PathBuf::from("assets/a.ogg"));
        assert!(err.to_string().contains("assets/a.ogg"));
    }

    #[test]
    fn test_io_error_display() {
        let err = ManifestError::Io(
            PathBuf::from("out/assets.ts"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("out/assets.ts"));
    }
}
