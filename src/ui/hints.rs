//! Remediation and next-step text.
//!
//! Every suggestion names the configured package manager, so a project
//! that uses npm gets `npm install` rather than `pnpm install`.

use crate::config::VerifyConfig;

/// Inline hint for a missing dependency tree.
pub fn install_hint(package_manager: &str) -> String {
    format!("run \"{} install\" first", package_manager)
}

/// Inline hint for a missing build artifact.
pub fn build_hint(package_manager: &str) -> String {
    format!("run \"{} run build\" to build", package_manager)
}

/// Suggestions printed after a failed verification.
pub fn remediation(config: &VerifyConfig) -> Vec<String> {
    let pm = &config.package_manager;
    vec![
        format!("Run \"{} install\" to install dependencies", pm),
        format!("Run \"{} run build\" to build the project", pm),
        format!(
            "Make sure {} {}+ is installed",
            config.runtime.name, config.runtime.min_major
        ),
        format!("Check the documentation at {}", config.docs_path),
    ]
}

/// Suggestions printed after a passing verification.
///
/// The build step is only suggested while build artifacts are missing.
pub fn next_steps(config: &VerifyConfig, needs_build: bool) -> Vec<String> {
    let pm = &config.package_manager;
    let mut steps = Vec::new();
    if needs_build {
        steps.push(format!("Run \"{} run build\" to build the project", pm));
    }
    steps.push(format!("Run \"{} dev\" to start in development mode", pm));
    steps.push(format!("Run \"{} dist\" to create a production build", pm));
    steps
}
