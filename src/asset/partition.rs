//! Partition of scanned paths by category.

use std::collections::BTreeMap;

use crate::core::{AssetPath, Category, ManifestError};

/// Paths grouped by category, each list in input order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Partition {
    groups: BTreeMap<Category, Vec<AssetPath>>,
}

impl Partition {
    /// Classify every path, aborting on the first unknown extension.
    pub fn from_paths<I>(paths: I) -> Result<Self, ManifestError>
    where
        I: IntoIterator<Item = AssetPath>,
    {
        let mut groups: BTreeMap<Category, Vec<AssetPath>> = BTreeMap::new();
        for path in paths {
            let category = Category::classify(&path)?;
            groups.entry(category).or_default().push(path);
        }
        Ok(Self { groups })
    }

    /// Paths of one category (empty if none).
    pub fn get(&self, category: Category) -> &[AssetPath] {
        self.groups.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Non-empty categories with their counts, in table order.
    pub fn counts(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        self.groups.iter().map(|(c, paths)| (*c, paths.len()))
    }

    /// Total number of classified paths.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
