//! Core types - pure abstractions shared across the codebase.

mod category;
mod error;
mod path;

pub use category::Category;
pub use error::ManifestError;
pub use path::AssetPath;
