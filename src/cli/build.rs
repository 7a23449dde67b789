//! Manifest build orchestration.
//!
//! Build pipeline phases:
//! - **Scan** - Collect asset paths from the asset directory
//! - **Classify** - Partition by category, abort on the first unknown type
//! - **Group** - Order audio variants by codec preference
//! - **Render** - Template prefix + export line + literal
//! - **Write** - Skipped when the output file is already up to date
//!
//! Nothing is written unless every phase before it succeeded.

use anyhow::{Context, Result};

use crate::{
    asset::{Partition, scan_assets},
    config::ManifestConfig,
    debug, log,
    manifest::{Manifest, WriteOutcome, render_module, write_if_changed},
    utils::plural_count,
};

/// Scan, classify and group assets according to `config`.
pub fn collect_manifest(config: &ManifestConfig) -> Result<Manifest> {
    let dir = config.asset_dir();
    let paths = scan_assets(&dir, &config.assets.public_path())?;
    log!("scan"; "{} in {}", plural_count(paths.len(), "file"), config.root_relative(&dir).display());

    let partition = Partition::from_paths(paths)?;
    for (category, count) in partition.counts() {
        debug!("scan"; "{category}: {count}");
    }

    let unranked = config.audio.unranked();
    if !unranked.is_empty() {
        debug!("audio"; "unranked extensions sort last: {}", unranked.join(", "));
    }

    let table = config.audio.preference_table();
    debug!("audio"; "preference: {}", table.order().join(" > "));
    let manifest = Manifest::build(&partition, &table, &config.output.extra_categories());
    Ok(manifest)
}

/// Produce the complete module text.
pub fn render(config: &ManifestConfig) -> Result<(Manifest, String)> {
    let manifest = collect_manifest(config)?;
    let template = config.read_template()?;
    let module = render_module(
        &manifest,
        template.as_deref(),
        &config.output.render_options(),
    )
    .context("failed to serialize manifest")?;
    Ok((manifest, module))
}

/// Run the `build` command.
pub fn run_build(config: &ManifestConfig, to_stdout: bool) -> Result<()> {
    let (manifest, module) = render(config)?;

    if to_stdout {
        print!("{module}");
        return Ok(());
    }

    let output = config.output_path();
    let display = config.root_relative(&output);
    let groups = plural_count(manifest.audio.len(), "audio group");

    match write_if_changed(&output, &module)? {
        WriteOutcome::Written => log!("build"; "wrote {} ({})", display.display(), groups),
        WriteOutcome::Unchanged => log!("build"; "{} unchanged ({})", display.display(), groups),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn project(files: &[&str], toml: &str) -> (TempDir, ManifestConfig) {
        let dir = TempDir::new().unwrap();
        for file in files {
            let path = dir.path().join("assets").join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "data").unwrap();
        }
        fs::create_dir_all(dir.path().join("assets")).unwrap();

        let mut config = test_parse_config(toml);
        config.root = dir.path().to_path_buf();
        (dir, config)
    }

    fn output(dir: &Path) -> String {
        fs::read_to_string(dir.join("assets.ts")).unwrap()
    }

    #[test]
    fn test_build_groups_audio() {
        let (dir, config) = project(&["a.webm", "a.mp3", "a.ogg"], "");
        run_build(&config, false).unwrap();

        assert_eq!(
            output(dir.path()),
            "export const assets: IAssetMapping = {\n  'audio': {\n    'a': [\n      'assets/a.webm',\n      'assets/a.ogg',\n      'assets/a.mp3'\n    ]\n  }\n};\n"
        );
    }

    #[test]
    fn test_build_without_audio() {
        let (dir, config) = project(&["b.png"], "");
        run_build(&config, false).unwrap();
        assert!(output(dir.path()).contains("'audio': {}"));
    }

    #[test]
    fn test_build_unknown_type_writes_nothing() {
        let (dir, config) = project(&["a.ogg", "c.xyz"], "");
        let err = run_build(&config, false).unwrap_err();

        assert_eq!(err.to_string(), "unknown file type: assets/c.xyz");
        assert!(!dir.path().join("assets.ts").exists());
    }

    #[test]
    fn test_build_unknown_type_keeps_previous_output() {
        let (dir, config) = project(&["c.xyz"], "");
        fs::write(dir.path().join("assets.ts"), "previous").unwrap();

        assert!(run_build(&config, false).is_err());
        assert_eq!(output(dir.path()), "previous");
    }

    #[test]
    fn test_build_preference_order_across_ranks() {
        let (_dir, config) = project(&["d.wav", "d.flac", "d.webm"], "[assets]\npublic_path = \"\"");
        let manifest = collect_manifest(&config).unwrap();
        assert_eq!(manifest.audio["d"], ["d.webm", "d.flac", "d.wav"]);
    }

    #[test]
    fn test_build_with_template_and_extras() {
        let (dir, config) = project(
            &["sfx/hit.ogg", "ui/logo.png"],
            "[output]\ntemplate = \"head.ts\"\npath = \"gen/out.ts\"\ncategories = [\"image\"]",
        );
        fs::write(dir.path().join("head.ts"), "import { IAssetMapping } from './types';").unwrap();

        run_build(&config, false).unwrap();
        let out = fs::read_to_string(dir.path().join("gen/out.ts")).unwrap();

        assert!(out.starts_with("import { IAssetMapping } from './types';\nexport const assets"));
        assert!(out.contains("'hit': [\n      'assets/sfx/hit.ogg'\n    ]"));
        assert!(out.contains("'image': [\n    'assets/ui/logo.png'\n  ]"));
    }

    #[test]
    fn test_build_missing_template_fails_before_write() {
        let (dir, config) = project(&["a.ogg"], "[output]\ntemplate = \"missing.ts\"");
        assert!(run_build(&config, false).is_err());
        assert!(!dir.path().join("assets.ts").exists());
    }

    #[test]
    fn test_build_stdout_writes_nothing() {
        let (dir, config) = project(&["a.ogg"], "");
        run_build(&config, true).unwrap();
        assert!(!dir.path().join("assets.ts").exists());
    }

    #[test]
    fn test_build_twice_is_stable() {
        let (dir, config) = project(&["a.mp3", "a.ogg", "b.wav"], "");
        run_build(&config, false).unwrap();
        let first = output(dir.path());

        let (_, second) = render(&config).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            write_if_changed(&dir.path().join("assets.ts"), &second).unwrap(),
            WriteOutcome::Unchanged
        );
    }

    #[test]
    fn test_build_missing_asset_dir() {
        let (_dir, mut config) = project(&[], "");
        config.assets.dir = "nope".into();
        let err = run_build(&config, false).unwrap_err();
        assert!(err.to_string().contains("asset directory not found"));
    }
}
