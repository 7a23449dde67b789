//! `[output]` section configuration.
//!
//! Controls the generated module.
//!
//! # Example
//!
//! ```toml
//! [output]
//! path = "src/generated/assets.ts"
//! template = "assets.template.ts"   # prepended verbatim
//! binding = "assets"                # export const <binding>: <type_name> = ...
//! type_name = "IAssetMapping"
//! quote = "single"                  # or "double"
//! categories = ["image", "font"]    # emitted next to `audio`
//! ```

use std::path::PathBuf;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::Category;
use crate::manifest::{QuoteStyle, RenderOptions};

const PATH: FieldPath = FieldPath::new("output.path");
const BINDING: FieldPath = FieldPath::new("output.binding");
const TYPE_NAME: FieldPath = FieldPath::new("output.type_name");
const CATEGORIES: FieldPath = FieldPath::new("output.categories");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Generated module path, relative to the project root.
    pub path: PathBuf,

    /// Optional file whose contents precede the export line.
    pub template: Option<PathBuf>,

    /// Name of the exported constant.
    pub binding: String,

    /// Type annotation of the exported constant.
    pub type_name: String,

    /// Quote style of the emitted literal.
    pub quote: QuoteStyle,

    /// Additional categories to emit as flat path lists.
    pub categories: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "assets.ts".into(),
            template: None,
            binding: "assets".into(),
            type_name: "IAssetMapping".into(),
            quote: QuoteStyle::Single,
            categories: Vec::new(),
        }
    }
}

impl OutputConfig {
    pub fn render_options(&self) -> RenderOptions<'_> {
        RenderOptions {
            binding: &self.binding,
            type_name: &self.type_name,
            quote: self.quote,
        }
    }

    /// Requested extra categories. Unknown names are dropped here;
    /// `validate` reports them.
    pub fn extra_categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .filter_map(|name| Category::from_name(name))
            .filter(|c| *c != Category::Audio)
            .collect()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.path.as_os_str().is_empty() {
            diag.error(PATH, "must not be empty");
        }

        if !is_identifier(&self.binding) {
            diag.error(BINDING, format!("`{}` is not a valid identifier", self.binding));
        }
        if !is_identifier(&self.type_name) {
            diag.error(
                TYPE_NAME,
                format!("`{}` is not a valid identifier", self.type_name),
            );
        }

        let mut seen = FxHashSet::default();
        for name in &self.categories {
            match Category::from_name(name) {
                None => {
                    let known: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
                    diag.error_with_hint(
                        CATEGORIES,
                        format!("unknown category `{name}`"),
                        format!("categories: {}", known.join(", ")),
                    );
                }
                Some(Category::Audio) => {
                    diag.error(CATEGORIES, "`audio` is always emitted, remove it");
                }
                Some(category) => {
                    if !seen.insert(category) {
                        diag.error(CATEGORIES, format!("duplicate category `{name}`"));
                    }
                }
            }
        }
    }
}

/// JavaScript-style identifier: `[A-Za-z_$][A-Za-z0-9_$]*`.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
