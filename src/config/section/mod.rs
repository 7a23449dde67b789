//! Configuration section definitions.
//!
//! Each module corresponds to a section in `assetmap.toml`:
//!
//! | Module   | TOML Section | Purpose                                  |
//! |----------|--------------|------------------------------------------|
//! | `assets` | `[assets]`   | Scanned directory and public path prefix |
//! | `audio`  | `[audio]`    | Codec preference order                   |
//! | `output` | `[output]`   | Generated module path, template, export  |

mod assets;
mod audio;
mod output;

pub use assets::AssetsConfig;
pub use audio::AudioConfig;
pub use output::OutputConfig;
