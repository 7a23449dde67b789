//! `[audio]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [audio]
//! # Most preferred first. Audio extensions left out sort after listed ones.
//! preference = ["ogg", "mp3", "wav"]
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::audio::{DEFAULT_PREFERENCE, PreferenceTable};
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::Category;

const PREFERENCE: FieldPath = FieldPath::new("audio.preference");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Codec preference order, most preferred first.
    pub preference: Vec<String>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            preference: DEFAULT_PREFERENCE.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl AudioConfig {
    pub fn preference_table(&self) -> PreferenceTable {
        PreferenceTable::new(self.preference.iter().cloned())
    }

    /// Audio extensions the preference order does not mention.
    pub fn unranked(&self) -> Vec<&'static str> {
        Category::Audio
            .extensions()
            .iter()
            .copied()
            .filter(|ext| !self.preference.iter().any(|p| p.as_str() == *ext))
            .collect()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let audio = Category::Audio.extensions();
        let mut seen = FxHashSet::default();

        for ext in &self.preference {
            if !audio.iter().any(|a| *a == ext.as_str()) {
                diag.error_with_hint(
                    PREFERENCE,
                    format!("`{ext}` is not an audio extension"),
                    format!("audio extensions: {}", audio.join(", ")),
                );
            } else if !seen.insert(ext.as_str()) {
                diag.error(PREFERENCE, format!("duplicate extension `{ext}`"));
            }
        }
    }
}
