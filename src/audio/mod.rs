//! Audio asset grouping.
//!
//! Collapses format variants of the same sound into one ordered list,
//! following a codec preference table.

mod group;
mod rank;

pub use group::{AudioGroups, group_audio};
pub use rank::{DEFAULT_PREFERENCE, PreferenceTable};
