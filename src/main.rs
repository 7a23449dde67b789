//! assetmap - generate a typed asset manifest from a directory of static assets.

mod asset;
mod audio;
mod cli;
mod config;
mod core;
mod logger;
mod manifest;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ManifestConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = ManifestConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { stdout, .. } => cli::build::run_build(&config, *stdout),
        Commands::Check { .. } => cli::check::run_check(&config),
    }
}
