//! `check` command: scan and classify without writing.

use anyhow::Result;

use crate::{
    asset::{Partition, scan_assets},
    audio::group_audio,
    config::ManifestConfig,
    core::Category,
    debug_do, log,
    utils::plural_count,
};

/// Summary of a classified asset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub counts: Vec<(Category, usize)>,
    pub audio_groups: usize,
    pub total: usize,
}

/// Classify every asset and count categories and audio groups.
pub fn check_assets(config: &ManifestConfig) -> Result<CheckReport> {
    let paths = scan_assets(&config.asset_dir(), &config.assets.public_path())?;
    let partition = Partition::from_paths(paths)?;

    let table = config.audio.preference_table();
    let audio_groups = group_audio(partition.get(Category::Audio), &table).len();

    Ok(CheckReport {
        counts: partition.counts().collect(),
        audio_groups,
        total: partition.len(),
    })
}

/// Run the `check` command.
pub fn run_check(config: &ManifestConfig) -> Result<()> {
    let report = check_assets(config)?;

    match &config.config_path {
        Some(path) => log!("check"; "config {}", config.root_relative(path).display()),
        None => log!("check"; "no config file, using defaults"),
    }

    for (category, count) in &report.counts {
        log!("check"; "{:<12} {}", category.name(), count);
    }

    debug_do! {
        log_shadowed_extensions();
    }

    log!(
        "check";
        "{} classified, {}",
        plural_count(report.total, "file"),
        plural_count(report.audio_groups, "audio group")
    );
    Ok(())
}

/// Explain extensions that a category declares but never receives.
fn log_shadowed_extensions() {
    for category in Category::ALL {
        for ext in category.shadowed_extensions() {
            let winner = Category::from_extension(ext).map_or("?", Category::name);
            log!("check"; "`.{ext}` is listed under {category} but classifies as {winner}");
        }
    }
}
