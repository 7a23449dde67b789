//! Asset directory scanning (pure, no side effects).

use std::path::Path;

use jwalk::WalkDir;

use crate::core::{AssetPath, ManifestError};
use crate::debug;

/// Scan an asset directory recursively.
///
/// Equivalent to the glob `<dir>/**/*.*`:
/// - hidden files and directories are skipped
/// - only file names containing a `.` are returned
/// - entries are sorted by name within each directory
///
/// Each result is `public_path/relative/path` with `/` separators,
/// or the bare relative path when `public_path` is empty.
///
/// ```text
/// assets/                        public_path = "static"
/// ├── .cache/x.ogg     -> (hidden, skipped)
/// ├── LICENSE          -> (no extension, skipped)
/// ├── logo.png         -> static/logo.png
/// └── sfx/
///     └── hit.ogg      -> static/sfx/hit.ogg
/// ```
pub fn scan_assets(dir: &Path, public_path: &str) -> Result<Vec<AssetPath>, ManifestError> {
    if !dir.is_dir() {
        return Err(ManifestError::AssetDirMissing(dir.to_path_buf()));
    }

    let mut results = Vec::new();

    for entry in WalkDir::new(dir).sort(true).skip_hidden(true) {
        let entry = entry.map_err(|e| ManifestError::Scan(dir.to_path_buf(), e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Ok(rel) = path.strip_prefix(dir) else {
            continue;
        };

        let rel = to_slash(rel).ok_or_else(|| ManifestError::NonUtf8Path(path.clone()))?;
        let name = rel.rsplit('/').next().unwrap_or(&rel);
        if !name.contains('.') {
            debug!("scan"; "skipping {rel} (no extension)");
            continue;
        }

        results.push(AssetPath::new(join_public(public_path, &rel)));
    }

    Ok(results)
}

/// Join path components with `/` regardless of platform.
///
/// `None` if any component is not valid UTF-8.
fn to_slash(rel: &Path) -> Option<String> {
    rel.components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()
        .map(|parts| parts.join("/"))
}

fn join_public(public_path: &str, rel: &str) -> String {
    let prefix = public_path.trim_end_matches('/');
    if prefix.is_empty() {
        rel.to_string()
    } else {
        format!("{prefix}/{rel}")
    }
}
