//! Relative asset path with derived extension and base name.

use serde::{Serialize, Serializer};
use std::fmt;

/// A relative, `/`-separated asset path as written into the manifest.
///
/// The path is opaque: it is never resolved against the filesystem once
/// constructed. Only the final component is inspected.
///
/// ```text
/// sfx/door.open.ogg
///     ├── file_name  = "door.open.ogg"
///     ├── extension  = "ogg"
///     └── base_name  = "door.open"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetPath(String);

impl AssetPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Last path component.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Text after the last `.` of the file name, compared literally.
    ///
    /// A dot in leading position does not start an extension, so
    /// `.env` has no extension (empty string).
    pub fn extension(&self) -> &str {
        match self.dot_index() {
            Some(idx) => &self.file_name()[idx + 1..],
            None => "",
        }
    }

    /// File name with the extension (and its dot) stripped.
    ///
    /// May be empty for degenerate names; callers treat that as a
    /// regular key.
    pub fn base_name(&self) -> &str {
        let name = self.file_name();
        match self.dot_index() {
            Some(idx) => &name[..idx],
            None => name,
        }
    }

    fn dot_index(&self) -> Option<usize> {
        self.file_name().rfind('.').filter(|&idx| idx > 0)
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetPath {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl PartialEq<&str> for AssetPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for AssetPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
