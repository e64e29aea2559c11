//! Environment checks and the verification checklist.
//!
//! Each phase of the checklist lives in its own module and returns a
//! [`SectionReport`]; [`Verifier`] runs them in order and collects the
//! [`Report`].
//!
//! - [`tools`] - Command-version checks and the runtime floor
//! - [`dependencies`] - Installed dependency tree
//! - [`build`] - Build artifacts (advisory)
//! - [`platform`] - Platform icon files
//! - [`files`] - Essential source and config files
//! - [`display`] - Section and summary rendering
//!
//! # Example
//!
//! ```
//! use verify_setup::checks::check_essential_files;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! std::fs::write(temp.path().join("package.json"), "{}").unwrap();
//!
//! let files = vec!["package.json".to_string(), "tsconfig.json".to_string()];
//! let report = check_essential_files(temp.path(), &files);
//! assert_eq!(report.failure_count(), 1);
//! ```

pub mod build;
pub mod dependencies;
pub mod display;
pub mod files;
pub mod outcome;
pub mod platform;
pub mod tools;
pub mod verifier;

#[cfg(test)]
pub(crate) mod testing;

pub use build::{check_build, BuildArtifacts};
pub use dependencies::check_dependencies;
pub use display::{show_section, show_summary};
pub use files::check_essential_files;
pub use outcome::{CheckOutcome, CheckStatus, Report, Section, SectionReport};
pub use platform::{check_platform, required_icon};
pub use tools::{check_runtime_floor, check_tool, check_tools};
pub use verifier::Verifier;
