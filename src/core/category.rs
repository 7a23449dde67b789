//! Asset category definitions and extension-based classification.

use std::fmt;

use serde::{Serialize, Serializer};

use super::{AssetPath, ManifestError};

/// Semantic type of an asset, determined by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Audio,
    Image,
    Font,
    BitmapFont,
    Json,
    Xml,
    Text,
    Js,
    Shader,
    Css,
}

/// Ordered category table.
///
/// Classification walks this table top to bottom and takes the first row
/// containing the extension. `xml` appears in both `BitmapFont` and `Xml`;
/// `BitmapFont` comes first and wins.
const CATEGORY_TABLE: &[(Category, &[&str])] = &[
    (
        Category::Audio,
        &["aac", "ac3", "caf", "flac", "m4a", "mp3", "mp4", "ogg", "wav", "webm"],
    ),
    (Category::Image, &["bmp", "gif", "jpg", "jpeg", "png", "webp"]),
    (Category::Font, &["eot", "otf", "svg", "ttf", "woff", "woff2"]),
    (Category::BitmapFont, &["xml", "fnt"]),
    (Category::Json, &["json"]),
    (Category::Xml, &["xml"]),
    (Category::Text, &["txt"]),
    (Category::Js, &["js"]),
    (Category::Shader, &["frag"]),
    (Category::Css, &["css"]),
];

impl Category {
    /// All categories in table order.
    pub const ALL: [Self; 10] = [
        Self::Audio,
        Self::Image,
        Self::Font,
        Self::BitmapFont,
        Self::Json,
        Self::Xml,
        Self::Text,
        Self::Js,
        Self::Shader,
        Self::Css,
    ];

    /// Classify a path by its extension.
    pub fn classify(path: &AssetPath) -> Result<Self, ManifestError> {
        Self::from_extension(path.extension())
            .ok_or_else(|| ManifestError::UnknownFileType(path.to_string()))
    }

    /// First category whose extension set contains `ext`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        CATEGORY_TABLE
            .iter()
            .find(|(_, exts)| exts.iter().any(|e| *e == ext))
            .map(|&(category, _)| category)
    }

    /// Extensions declared for this category.
    pub fn extensions(self) -> &'static [&'static str] {
        CATEGORY_TABLE
            .iter()
            .find(|(category, _)| *category == self)
            .map(|&(_, exts)| exts)
            .unwrap_or_default()
    }

    /// Name used as the manifest key and in config.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Image => "image",
            Self::Font => "font",
            Self::BitmapFont => "bitmapFont",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Text => "text",
            Self::Js => "js",
            Self::Shader => "shader",
            Self::Css => "css",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Extensions of this category that an earlier table row claims.
    ///
    /// Such extensions can never classify into `self`.
    pub fn shadowed_extensions(self) -> Vec<&'static str> {
        self.extensions()
            .iter()
            .copied()
            .filter(|ext| Self::from_extension(ext) != Some(self))
            .collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
