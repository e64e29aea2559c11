//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! Without a config file the defaults describe the standard Electron project
//! layout (`node_modules`, `dist`, `static/js/main.js`, `build/icon.*`).
//!
//! # Example
//!
//! ```
//! use verify_setup::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".verify-setup.yml"), "package_manager: npm").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.package_manager, "npm");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_project_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{
    BuildConfig, DependenciesConfig, PackageConfig, PlatformConfig, RuntimeConfig, ToolConfig,
    VerifyConfig,
};
pub use validator::{validate, validate_config, ValidationError};
