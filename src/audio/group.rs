//! Grouping of audio format variants by logical name.
//!
//! ```text
//! input                      output
//! ─────────────────────      ───────────────────────────────────
//! music/theme.mp3            theme -> [theme.webm, theme.ogg, theme.mp3]
//! music/theme.webm
//! sfx/click.wav              click -> [click.wav]
//! music/theme.ogg
//! ```

use std::collections::BTreeMap;

use crate::core::AssetPath;

use super::PreferenceTable;

/// Logical asset name -> format variants, most preferred first.
pub type AudioGroups = BTreeMap<String, Vec<AssetPath>>;

/// Group audio paths by base name and order each group by codec preference.
///
/// Paths are assumed to be classified as audio already. The sort is stable,
/// so variants of equal rank keep their input order, and unranked
/// extensions end up after all ranked ones.
pub fn group_audio(paths: &[AssetPath], table: &PreferenceTable) -> AudioGroups {
    let mut groups = AudioGroups::new();

    for path in paths {
        groups
            .entry(path.base_name().to_owned())
            .or_default()
            .push(path.clone());
    }

    for variants in groups.values_mut() {
        variants.sort_by_key(|path| table.rank(path.extension()));
    }

    groups
}
