//! Build artifact checks.
//!
//! Artifacts are expected to be missing before the first build, so every
//! problem here is a warning.

use std::path::Path;

use crate::config::VerifyConfig;
use crate::ui::hints;

use super::outcome::{CheckOutcome, Section, SectionReport};

/// Which build artifacts exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildArtifacts {
    pub output_dir: bool,
    pub bundle: bool,
}

impl BuildArtifacts {
    /// Whether both the output directory and the bundle exist.
    pub fn is_complete(&self) -> bool {
        self.output_dir && self.bundle
    }
}

/// Check the build output directory and the renderer bundle.
pub fn check_build(root: &Path, config: &VerifyConfig) -> (SectionReport, BuildArtifacts) {
    let mut report = SectionReport::new(Section::BuildStatus);
    let build = &config.build;
    let hint = hints::build_hint(&config.package_manager);

    let artifacts = BuildArtifacts {
        output_dir: root.join(&build.output_dir).exists(),
        bundle: root.join(&build.bundle).exists(),
    };

    let output_label = format!("{}/ directory", build.output_dir.trim_end_matches('/'));
    if artifacts.output_dir {
        report.push(CheckOutcome::passed(format!("{} exists", output_label)));
    } else {
        report.push(CheckOutcome::warning(format!(
            "{} not found - {}",
            output_label, hint
        )));
    }

    if artifacts.bundle {
        report.push(CheckOutcome::passed("Renderer bundle exists"));
    } else {
        report.push(CheckOutcome::warning(format!(
            "Renderer bundle not found - {}",
            hint
        )));
    }

    (report, artifacts)
}
