//! Configuration file discovery and loading.

use crate::config::schema::VerifyConfig;
use crate::error::{Result, VerifyError};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".verify-setup.yml";

/// Find the project config at `<project_root>/.verify-setup.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into [`VerifyConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<VerifyConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VerifyError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VerifyError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`VerifyConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<VerifyConfig> {
    if content.trim().is_empty() {
        return Ok(VerifyConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| VerifyError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve the configuration for a run.
///
/// An explicit path must exist; a relative one is taken from the current
/// directory, not the project root. Without one, the project config is used
/// if present, otherwise the built-in defaults.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<VerifyConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_project_config(project_root),
    };

    match path {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!("No config file found, using defaults");
            Ok(VerifyConfig::default())
        }
    }
}
