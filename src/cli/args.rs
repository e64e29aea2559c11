//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// Verify that a development environment is ready to build the desktop app.
#[derive(Debug, Parser)]
#[command(name = "verify-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default .verify-setup.yml)
    #[arg(short, long, env = "VERIFY_SETUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Also show the command behind each tool check
    #[arg(short, long)]
    pub verbose: bool,

    /// Only show warnings, failures and the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
