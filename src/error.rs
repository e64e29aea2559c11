//! Error types for verification runs.
//!
//! This module defines [`VerifyError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Individual checks never return errors; failures become report entries
//! - `VerifyError` covers what can stop a run before the checklist starts
//!   (configuration) and command execution plumbing
//! - Use `anyhow::Error` (via `VerifyError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for verification.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Configuration file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Project root does not exist or is not a directory.
    #[error("Project root not found: {path}")]
    ProjectRootNotFound { path: PathBuf },

    /// External command could not be run.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for verification operations.
pub type Result<T> = std::result::Result<T, VerifyError>;
