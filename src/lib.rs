//! verify-setup - development environment verification.
//!
//! Checks that a machine is ready to build an Electron desktop project:
//! required tools and their versions, installed dependencies, build
//! artifacts, platform icons and essential source files. Every check runs;
//! the verdict and exit code come from the collected report.
//!
//! # Modules
//!
//! - [`checks`] - The checklist phases, report model and verifier
//! - [`cli`] - Command-line interface and the verify command
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`environment`] - Platform classification and version parsing
//! - [`error`] - Error types and result aliases
//! - [`shell`] - External command execution
//! - [`ui`] - Status glyphs, themes and report output
//!
//! # Example
//!
//! ```
//! use verify_setup::environment::RuntimeVersion;
//!
//! let version = RuntimeVersion::parse("v16.2.0").unwrap();
//! assert!(!version.meets_major(18));
//! assert!(RuntimeVersion::parse("nodejs").is_none());
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{Result, VerifyError};
