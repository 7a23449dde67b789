//! `[assets]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [assets]
//! dir = "static/assets"        # scanned recursively
//! public_path = "assets"       # prefix written into the manifest
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

const DIR: FieldPath = FieldPath::new("assets.dir");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory to scan, relative to the project root.
    pub dir: PathBuf,

    /// Prefix for paths in the manifest.
    /// Defaults to `dir` as written. An empty string emits bare
    /// paths relative to `dir`.
    pub public_path: Option<String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: "assets".into(),
            public_path: None,
        }
    }
}

impl AssetsConfig {
    /// Prefix written in front of every scanned path.
    pub fn public_path(&self) -> String {
        match &self.public_path {
            Some(prefix) => prefix.clone(),
            None => self.dir.to_string_lossy().replace('\\', "/"),
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.dir.as_os_str().is_empty() {
            diag.error(DIR, "must not be empty");
        }
    }
}
