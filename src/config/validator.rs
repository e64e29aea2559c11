//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - Tools need a name and a command, and names are unique
//! - `runtime.tool` must name a configured tool
//! - Checked paths must be non-empty and relative to the project root

use crate::config::schema::VerifyConfig;
use crate::error::{Result, VerifyError};
use std::collections::HashSet;
use std::path::Path;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a configuration and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_config(config: &VerifyConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_tools(config));
    errors.extend(validate_runtime(config));
    errors.extend(validate_paths(config));

    errors
}

/// Validate and fold all errors into a single [`VerifyError`].
pub fn validate(config: &VerifyConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(VerifyError::ConfigValidationError { message })
}

fn validate_tools(config: &VerifyConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (idx, tool) in config.tools.iter().enumerate() {
        if tool.name.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-tool-name",
                format!("Tool #{} has an empty name", idx + 1),
            ));
        } else if !seen.insert(tool.name.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-tool",
                format!("Tool '{}' is listed more than once", tool.name),
            ));
        }

        if tool.command.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-tool-command",
                format!("Tool '{}' has an empty command", tool.name),
            ));
        }
    }

    errors
}

fn validate_runtime(config: &VerifyConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.runtime.min_major == 0 {
        errors.push(ValidationError::new(
            "runtime-floor",
            "runtime.min_major must be greater than 0".to_string(),
        ));
    }

    if !config.runtime.tool.is_empty() && config.runtime_tool().is_none() {
        errors.push(ValidationError::new(
            "unknown-runtime-tool",
            format!(
                "runtime.tool '{}' does not match any configured tool",
                config.runtime.tool
            ),
        ));
    }

    errors
}

fn validate_paths(config: &VerifyConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut check = |field: &str, value: &str| {
        if value.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-path",
                format!("{} must not be empty", field),
            ));
        } else if Path::new(value).is_absolute() {
            errors.push(ValidationError::new(
                "absolute-path",
                format!("{} must be relative to the project root: {}", field, value),
            ));
        }
    };

    check("dependencies.dir", &config.dependencies.dir);
    for package in &config.dependencies.packages {
        check("dependencies.packages[].name", &package.name);
    }
    check("build.output_dir", &config.build.output_dir);
    check("build.bundle", &config.build.bundle);
    check("platform.resources_dir", &config.platform.resources_dir);
    check("platform.windows_icon", &config.platform.windows_icon);
    check("platform.macos_icon", &config.platform.macos_icon);
    for file in &config.essential_files {
        check("essential_files[]", file);
    }

    errors
}
