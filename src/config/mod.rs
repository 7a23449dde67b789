//! Project configuration management for `assetmap.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── assets     # [assets]
//! │   ├── audio      # [audio]
//! │   └── output     # [output]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util.rs        # Config file search, path resolution
//! └── mod.rs         # ManifestConfig (this file)
//! ```
//!
//! The config file is optional. Without one, defaults apply and the
//! current directory is the project root.

pub mod section;
pub mod types;
mod util;

use util::{find_config_from, resolve_in_root};

pub use section::{AssetsConfig, AudioConfig, OutputConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands, ScanArgs},
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file searched for when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "assetmap.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing assetmap.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory - parent of config file or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Scanned asset directory
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Audio grouping settings
    #[serde(default)]
    pub audio: AudioConfig,

    /// Generated module settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl ManifestConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// Without `--config`, searches upward from cwd for `assetmap.toml` and
    /// falls back to defaults rooted at cwd when none exists. An explicit
    /// `--config` must exist. CLI overrides are applied last.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, cwd)
    }

    fn load_from(cli: &Cli, cwd: PathBuf) -> Result<Self> {
        // before the search, so config lookup shows up under --verbose
        crate::logger::set_verbose(cli.command.scan_args().verbose);

        let mut config = match Self::resolve_config_path(cli, &cwd)? {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                config.config_path = Some(path);
                config
            }
            None => {
                debug!("config"; "{CONFIG_FILE_NAME} not found, using defaults");
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.apply_command_options(&cli.command);
        config.validate()?;
        Ok(config)
    }

    /// Locate the config file: the explicit `--config` path, or an upward
    /// search for the default name.
    fn resolve_config_path(cli: &Cli, cwd: &Path) -> Result<Option<PathBuf>> {
        let Some(explicit) = &cli.config else {
            return Ok(find_config_from(cwd, Path::new(CONFIG_FILE_NAME)));
        };

        let path = resolve_in_root(explicit, cwd);
        if !path.is_file() {
            let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found");
            return Err(ConfigError::Io(path, err).into());
        }
        Ok(Some(path))
    }

    /// Parse configuration from TOML string
    #[allow(dead_code)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) =
            Self::parse_with_ignored(&content).map_err(ConfigError::Toml)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // resolved paths
    // ========================================================================

    /// Absolute asset directory to scan.
    pub fn asset_dir(&self) -> PathBuf {
        resolve_in_root(&self.assets.dir, &self.root)
    }

    /// Absolute path of the generated module.
    pub fn output_path(&self) -> PathBuf {
        resolve_in_root(&self.output.path, &self.root)
    }

    /// Absolute path of the template prefix file, if configured.
    pub fn template_path(&self) -> Option<PathBuf> {
        self.output
            .template
            .as_deref()
            .map(|p| resolve_in_root(p, &self.root))
    }

    /// Read the template prefix, if configured.
    pub fn read_template(&self) -> Result<Option<String>> {
        let Some(path) = self.template_path() else {
            return Ok(None);
        };
        let content =
            fs::read_to_string(&path).map_err(|err| ConfigError::Io(path.clone(), err))?;
        Ok(Some(content))
    }

    /// Get path relative to the project root, for display.
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, command: &Commands) {
        match command {
            Commands::Build {
                scan,
                output,
                template,
                ..
            } => {
                self.apply_scan_args(scan);
                Self::update_option(&mut self.output.path, output.as_ref());
                if let Some(template) = template {
                    self.output.template = Some(template.clone());
                }
            }
            Commands::Check { scan } => self.apply_scan_args(scan),
        }
    }

    /// Apply shared scan arguments from CLI.
    fn apply_scan_args(&mut self, args: &ScanArgs) {
        Self::update_option(&mut self.assets.dir, args.dir.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.assets.validate(&mut diag);
        self.audio.validate(&mut diag);
        self.output.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ManifestConfig {
    let (parsed, ignored) = ManifestConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(ManifestConfig::from_str("[assets\ndir = \"x\"").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = ManifestConfig::default();
        assert!(config.config_path.is_none());
        assert_eq!(config.assets.dir, PathBuf::from("assets"));
        assert_eq!(config.output.path, PathBuf::from("assets.ts"));
        assert_eq!(config.audio.preference.len(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[assets]\ndir = \"media\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = ManifestConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.assets.dir, PathBuf::from("media"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[output]\npath = \"gen/assets.ts\"";
        let (_, ignored) = ManifestConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_resolved_paths() {
        let mut config = test_parse_config(
            "[assets]\ndir = \"media\"\n[output]\npath = \"gen/assets.ts\"\ntemplate = \"tpl.ts\"",
        );
        config.root = PathBuf::from("/game");

        assert_eq!(config.asset_dir(), PathBuf::from("/game/media"));
        assert_eq!(config.output_path(), PathBuf::from("/game/gen/assets.ts"));
        assert_eq!(config.template_path(), Some(PathBuf::from("/game/tpl.ts")));
        assert_eq!(
            config.root_relative("/game/gen/assets.ts"),
            PathBuf::from("gen/assets.ts")
        );
    }

    #[test]
    fn test_read_template_missing_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = test_parse_config("[output]\ntemplate = \"missing.ts\"");
        config.root = dir.path().to_path_buf();
        assert!(config.read_template().is_err());
    }

    #[test]
    fn test_read_template_none() {
        let config = ManifestConfig::default();
        assert!(config.read_template().unwrap().is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "assetmap", "build", "-d", "media", "-o", "out.ts", "-t", "head.ts",
        ]);
        let mut config = ManifestConfig::default();
        config.apply_command_options(&cli.command);

        assert_eq!(config.assets.dir, PathBuf::from("media"));
        assert_eq!(config.assets.public_path(), "media");
        assert_eq!(config.output.path, PathBuf::from("out.ts"));
        assert_eq!(config.output.template, Some(PathBuf::from("head.ts")));
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let cli = Cli::parse_from(["assetmap", "-C", "typo-assetmap.toml", "build"]);

        let err = ManifestConfig::load_from(&cli, dir.path().to_path_buf()).unwrap_err();
        let Some(ConfigError::Io(path, _)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected io error, got {err}");
        };
        assert_eq!(path, &dir.path().join("typo-assetmap.toml"));
    }

    #[test]
    fn test_explicit_config_sets_root() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("cfg")).unwrap();
        std::fs::write(
            dir.path().join("cfg/game.toml"),
            "[output]\npath = \"gen/assets.ts\"",
        )
        .unwrap();
        let cli = Cli::parse_from(["assetmap", "-C", "cfg/game.toml", "check"]);

        let config = ManifestConfig::load_from(&cli, dir.path().to_path_buf()).unwrap();
        assert_eq!(config.root, dir.path().join("cfg"));
        assert_eq!(config.config_path, Some(dir.path().join("cfg/game.toml")));
        assert_eq!(config.output_path(), dir.path().join("cfg/gen/assets.ts"));
    }

    #[test]
    fn test_default_config_found_upward() {
        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("assets/sfx");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[assets]\ndir = \"media\"").unwrap();
        let cli = Cli::parse_from(["assetmap", "check"]);

        let config = ManifestConfig::load_from(&cli, nested).unwrap();
        assert_eq!(config.root, dir.path());
        assert_eq!(config.assets.dir, PathBuf::from("media"));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = test_parse_config(
            "[audio]\npreference = [\"png\"]\n[output]\nbinding = \"\"\ncategories = [\"nope\"]",
        );
        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err}");
        };
        assert_eq!(diag.len(), 3);
    }
}
