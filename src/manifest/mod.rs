//! Manifest assembly, rendering and output.
//!
//! | Module   | Purpose                                           |
//! |----------|---------------------------------------------------|
//! | `render` | Template prefix + export line + quoted literal    |
//! | `write`  | Write the module unless the file is identical     |

mod render;
mod write;

pub use render::{QuoteStyle, RenderOptions, render_module};
pub use write::{WriteOutcome, write_if_changed};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::asset::Partition;
use crate::audio::{AudioGroups, PreferenceTable, group_audio};
use crate::core::{AssetPath, Category};

/// Generated asset manifest.
///
/// `audio` is always present. Other categories appear only when requested,
/// as flat path lists in scan order, keyed in category table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub audio: AudioGroups,
    pub extra: Vec<(Category, Vec<AssetPath>)>,
}

impl Manifest {
    /// Build from an already classified partition.
    pub fn build(partition: &Partition, table: &PreferenceTable, extra: &[Category]) -> Self {
        let audio = group_audio(partition.get(Category::Audio), table);
        let extra = Category::ALL
            .into_iter()
            .filter(|c| *c != Category::Audio && extra.contains(c))
            .map(|c| (c, partition.get(c).to_vec()))
            .collect();
        Self { audio, extra }
    }

    /// Classify, group and assemble in one step.
    ///
    /// Fails on the first path whose extension matches no category.
    #[cfg(test)]
    pub fn from_paths(
        paths: Vec<AssetPath>,
        table: &PreferenceTable,
        extra: &[Category],
    ) -> Result<Self, crate::core::ManifestError> {
        let partition = Partition::from_paths(paths)?;
        Ok(Self::build(&partition, table, extra))
    }
}

impl Serialize for Manifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.extra.len()))?;
        map.serialize_entry(Category::Audio.name(), &self.audio)?;
        for (category, paths) in &self.extra {
            map.serialize_entry(category.name(), paths)?;
        }
        map.end()
    }
}
