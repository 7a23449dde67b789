//! Codec preference ranking for audio format variants.

use rustc_hash::FxHashMap;

/// Default codec preference, most preferred first.
pub const DEFAULT_PREFERENCE: [&str; 10] = [
    "webm", "ogg", "m4a", "mp3", "aac", "ac3", "caf", "flac", "mp4", "wav",
];

/// Position of an extension in the preference order.
///
/// `Unranked` orders after every `Ranked` value, so formats missing from
/// the table sort last within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Ranked(usize),
    Unranked,
}

/// Immutable extension -> rank lookup, built once per run.
#[derive(Debug, Clone)]
pub struct PreferenceTable {
    order: Vec<String>,
    ranks: FxHashMap<String, usize>,
}

impl PreferenceTable {
    /// Build from an ordered list. A repeated extension keeps its first rank.
    pub fn new<I, S>(order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ranks = FxHashMap::default();
        let mut kept = Vec::new();
        for ext in order {
            let ext = ext.into();
            if !ranks.contains_key(&ext) {
                ranks.insert(ext.clone(), kept.len());
                kept.push(ext);
            }
        }
        Self { order: kept, ranks }
    }

    #[inline]
    pub fn rank(&self, ext: &str) -> Rank {
        self.ranks.get(ext).map_or(Rank::Unranked, |&r| Rank::Ranked(r))
    }

    /// Extensions in rank order.
    pub fn order(&self) -> &[String] {
        &self.order
    }
}

impl Default for PreferenceTable {
    fn default() -> Self {
        Self::new(DEFAULT_PREFERENCE)
    }
}
