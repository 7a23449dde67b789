//! Rendering of the manifest into a source module.
//!
//! ```text
//! <template prefix>
//! export const assets: IAssetMapping = {
//!   'audio': {
//!     'theme': [
//!       'assets/theme.webm',
//!       'assets/theme.ogg'
//!     ]
//!   }
//! };
//! ```

use serde::{Deserialize, Serialize};

use super::Manifest;

/// String quoting used in the emitted literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

/// Export line settings.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    pub binding: &'a str,
    pub type_name: &'a str,
    pub quote: QuoteStyle,
}

/// Render the full module text.
///
/// The template prefix, when present, is followed by a newline and then the
/// export line. The literal is two-space indented JSON.
pub fn render_module(
    manifest: &Manifest,
    template: Option<&str>,
    options: &RenderOptions<'_>,
) -> serde_json::Result<String> {
    let json = serde_json::to_string_pretty(manifest)?;
    let literal = match options.quote {
        QuoteStyle::Double => json,
        QuoteStyle::Single => to_single_quotes(&json),
    };

    let mut out = String::with_capacity(literal.len() + 64);
    if let Some(template) = template {
        out.push_str(template);
        out.push('\n');
    }
    out.push_str(&format!(
        "export const {}: {} = {};\n",
        options.binding, options.type_name, literal
    ));
    Ok(out)
}

/// Convert JSON string literals from double to single quotes.
///
/// Works on serializer output, so strings are well formed. Inside a
/// string `'` gets escaped and `\"` loses its escape; other escapes are
/// kept as they are.
pub fn to_single_quotes(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut chars = json.chars();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        match (in_string, c) {
            (_, '"') => {
                in_string = !in_string;
                out.push('\'');
            }
            (true, '\'') => out.push_str("\\'"),
            (true, '\\') => match chars.next() {
                Some('"') => out.push('"'),
                Some(next) => {
                    out.push('\\');
                    out.push(next);
                }
                None => out.push('\\'),
            },
            (_, c) => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::PreferenceTable;
    use crate::core::AssetPath;

    const OPTIONS: RenderOptions<'static> = RenderOptions {
        binding: "assets",
        type_name: "IAssetMapping",
        quote: QuoteStyle::Single,
    };

    fn manifest(items: &[&str]) -> Manifest {
        let paths = items.iter().copied().map(AssetPath::from).collect();
        Manifest::from_paths(paths, &PreferenceTable::default(), &[]).unwrap()
    }

    #[test]
    fn test_render_single_quotes() {
        let out = render_module(&manifest(&["a.mp3", "a.webm"]), None, &OPTIONS).unwrap();
        let expected = "export const assets: IAssetMapping = {\n  'audio': {\n    'a': [\n      'a.webm',\n      'a.mp3'\n    ]\n  }\n};\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_double_quotes() {
        let options = RenderOptions {
            quote: QuoteStyle::Double,
            ..OPTIONS
        };
        let out = render_module(&manifest(&["a.ogg"]), None, &options).unwrap();
        assert!(out.contains("\"a\": [\n      \"a.ogg\"\n    ]"));
    }

    #[test]
    fn test_render_with_template() {
        let template = "import { IAssetMapping } from './types';\n";
        let out = render_module(&manifest(&[]), Some(template), &OPTIONS).unwrap();
        assert_eq!(
            out,
            "import { IAssetMapping } from './types';\n\nexport const assets: IAssetMapping = {\n  'audio': {}\n};\n"
        );
    }

    #[test]
    fn test_render_custom_binding() {
        let options = RenderOptions {
            binding: "sounds",
            type_name: "SoundMap",
            ..OPTIONS
        };
        let out = render_module(&manifest(&[]), None, &options).unwrap();
        assert!(out.starts_with("export const sounds: SoundMap = "));
    }

    #[test]
    fn test_single_quotes_escape_apostrophe() {
        assert_eq!(to_single_quotes(r#"["it's.ogg"]"#), r#"['it\'s.ogg']"#);
    }

    #[test]
    fn test_single_quotes_unescape_double_quote() {
        assert_eq!(to_single_quotes(r#"["say \"hi\".ogg"]"#), r#"['say "hi".ogg']"#);
    }

    #[test]
    fn test_single_quotes_keep_other_escapes() {
        assert_eq!(to_single_quotes(r#"{"a\\b":"x\ny"}"#), r#"{'a\\b':'x\ny'}"#);
    }

    #[test]
    fn test_quote_style_deserialize() {
        #[derive(Deserialize)]
        struct Holder {
            quote: QuoteStyle,
        }
        let h: Holder = toml::from_str("quote = \"double\"").unwrap();
        assert_eq!(h.quote, QuoteStyle::Double);
        assert!(toml::from_str::<Holder>("quote = \"backtick\"").is_err());
    }
}
