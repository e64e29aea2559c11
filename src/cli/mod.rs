//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`verify`] - The verify command and exit code mapping

pub mod args;
pub mod verify;

pub use args::Cli;
pub use verify::{Command, CommandResult, VerifyCommand, CONFIG_ERROR_EXIT_CODE};
