//! Platform-specific checks.

use std::path::Path;

use crate::config::PlatformConfig;
use crate::environment::Platform;

use super::outcome::{CheckOutcome, Section, SectionReport};

/// The icon file a platform must ship, if any.
pub fn required_icon<'a>(platform: &Platform, config: &'a PlatformConfig) -> Option<&'a str> {
    match platform {
        Platform::Windows => Some(config.windows_icon.as_str()),
        Platform::MacOs => Some(config.macos_icon.as_str()),
        Platform::Linux | Platform::Other(_) => None,
    }
}

/// Report the platform and check its icon in the build resources directory.
pub fn check_platform(root: &Path, config: &PlatformConfig, platform: &Platform) -> SectionReport {
    let mut report = SectionReport::new(Section::Platform);
    report.push(CheckOutcome::note(format!("Platform: {}", platform)));

    if let Some(name) = platform.display_name() {
        report.push(CheckOutcome::note(format!("{} detected", name)));
    }

    if let (Some(icon), Some(name)) = (required_icon(platform, config), platform.display_name()) {
        let label = format!("{} icon ({})", name, icon);
        if root.join(&config.resources_dir).join(icon).exists() {
            report.push(CheckOutcome::passed(format!("{} exists", label)));
        } else {
            report.push(CheckOutcome::failed(format!("{} not found", label)));
        }
    }

    report
}
