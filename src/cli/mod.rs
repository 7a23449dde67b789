//! Command-line interface module.

mod args;
pub mod build;
pub mod check;

pub use args::{Cli, Commands, ScanArgs};
