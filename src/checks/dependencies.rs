//! Installed dependency checks.

use std::path::Path;

use crate::config::VerifyConfig;
use crate::ui::hints;

use super::outcome::{CheckOutcome, Section, SectionReport};

/// Check the dependency tree root and each required package inside it.
///
/// A missing root is a single failure; the package checks are skipped
/// because they could only repeat it.
pub fn check_dependencies(root: &Path, config: &VerifyConfig) -> SectionReport {
    let mut report = SectionReport::new(Section::Dependencies);
    let deps = &config.dependencies;
    let dir = root.join(&deps.dir);

    if !dir.exists() {
        report.push(CheckOutcome::failed(format!(
            "{} not found - {}",
            deps.dir,
            hints::install_hint(&config.package_manager)
        )));
        return report;
    }

    report.push(CheckOutcome::passed(format!("{} directory exists", deps.dir)));

    for package in &deps.packages {
        if dir.join(&package.name).exists() {
            report.push(CheckOutcome::passed(format!("{} is installed", package.label)));
        } else {
            report.push(CheckOutcome::failed(format!(
                "{} is not installed",
                package.label
            )));
        }
    }

    report
}
