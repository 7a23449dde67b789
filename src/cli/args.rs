//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Asset manifest generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path [default: assetmap.toml, searched upward from cwd]
    ///
    /// An explicit path must exist.
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scan assets and write the manifest module
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        scan: ScanArgs,

        /// Output file path (relative to project root)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Template prefix file (relative to project root)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        template: Option<PathBuf>,

        /// Print the module to stdout instead of writing it
        #[arg(short, long)]
        stdout: bool,
    },

    /// Scan and classify assets without writing anything
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        scan: ScanArgs,
    },
}

/// Shared scan arguments for Build and Check commands
#[derive(clap::Args, Debug, Clone)]
pub struct ScanArgs {
    /// Asset directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Commands {
    /// Scan arguments shared by every command.
    pub const fn scan_args(&self) -> &ScanArgs {
        match self {
            Self::Build { scan, .. } | Self::Check { scan } => scan,
        }
    }
}

#[allow(unused)]
impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check { .. })
    }
}
