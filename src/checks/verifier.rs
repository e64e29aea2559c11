//! The ordered verification checklist.

use std::path::{Path, PathBuf};

use crate::config::VerifyConfig;
use crate::environment::Platform;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::build::check_build;
use super::dependencies::check_dependencies;
use super::display::{show_section, show_summary};
use super::files::check_essential_files;
use super::outcome::{Report, SectionReport};
use super::platform::check_platform;
use super::tools::check_tools;

/// Runs every check in a fixed order and prints the report as it goes.
///
/// No check can stop the run; the verdict comes from the returned
/// [`Report`] once all sections are done.
pub struct Verifier<'a> {
    root: PathBuf,
    config: &'a VerifyConfig,
    runner: &'a dyn CommandRunner,
    platform: Platform,
}

impl<'a> Verifier<'a> {
    /// Create a verifier for the current platform.
    pub fn new(root: &Path, config: &'a VerifyConfig, runner: &'a dyn CommandRunner) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
            runner,
            platform: Platform::current(),
        }
    }

    /// Verify as if running on `platform`.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Get the project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run the checklist.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Report {
        let mut report = Report::new();

        ui.show_banner(&format!("🔍 {} - Setup Verification", self.config.app_name));

        self.record(ui, &mut report, check_tools(self.config, self.runner));
        self.record(ui, &mut report, check_dependencies(&self.root, self.config));

        let (build, artifacts) = check_build(&self.root, self.config);
        report.set_needs_build(!artifacts.is_complete());
        self.record(ui, &mut report, build);

        self.record(
            ui,
            &mut report,
            check_platform(&self.root, &self.config.platform, &self.platform),
        );
        self.record(
            ui,
            &mut report,
            check_essential_files(&self.root, &self.config.essential_files),
        );

        show_summary(ui, self.config, &report);

        tracing::debug!(
            "Verification finished with {} failure(s), {} warning(s)",
            report.failure_count(),
            report.warnings().len()
        );
        report
    }

    fn record(&self, ui: &mut dyn UserInterface, report: &mut Report, section: SectionReport) {
        tracing::debug!(
            "{:?}: {} failure(s)",
            section.section,
            section.failure_count()
        );
        show_section(ui, &section);
        report.push(section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::FakeRunner;
    use crate::checks::Section;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn healthy_runner() -> FakeRunner {
        FakeRunner::new()
            .with_output("node --version", "v20.11.1\n")
            .with_output("pnpm --version", "9.1.0\n")
            .with_output("git --version", "git version 2.43.0\n")
    }

    fn touch(root: &Path, file: &str) {
        let path = root.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn installed_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("node_modules/electron")).unwrap();
        fs::create_dir_all(temp.path().join("node_modules/typescript")).unwrap();
        for file in VerifyConfig::default().essential_files {
            touch(temp.path(), &file);
        }
        touch(temp.path(), "build/icon.ico");
        touch(temp.path(), "build/icon.icns");
        temp
    }

    #[test]
    fn sections_run_in_order() {
        let temp = TempDir::new().unwrap();
        let config = VerifyConfig::default();
        let runner = healthy_runner();
        let mut ui = MockUI::new();

        let report = Verifier::new(temp.path(), &config, &runner)
            .with_platform(Platform::Linux)
            .run(&mut ui);

        let expected = vec![
            Section::Prerequisites,
            Section::Dependencies,
            Section::BuildStatus,
            Section::Platform,
            Section::SourceFiles,
        ];
        let order: Vec<_> = report.sections().iter().map(|s| s.section).collect();
        assert_eq!(order, expected);
        let headers: Vec<_> = expected.iter().map(|s| s.title().to_string()).collect();
        assert_eq!(ui.headers(), headers);
    }

    #[test]
    fn every_tool_runs_exactly_once_in_order() {
        let temp = TempDir::new().unwrap();
        let config = VerifyConfig::default();
        let runner = FakeRunner::new();
        let mut ui = MockUI::new();

        Verifier::new(temp.path(), &config, &runner)
            .with_platform(Platform::Linux)
            .run(&mut ui);

        assert_eq!(
            runner.calls(),
            vec!["node --version", "pnpm --version", "git --version"]
        );
    }

    #[test]
    fn failures_do_not_stop_the_run() {
        let temp = TempDir::new().unwrap();
        let config = VerifyConfig::default();
        let runner = FakeRunner::new();
        let mut ui = MockUI::new();

        let report = Verifier::new(temp.path(), &config, &runner)
            .with_platform(Platform::Windows)
            .run(&mut ui);

        // 3 tools + node_modules + icon + 8 files
        assert_eq!(report.failure_count(), 13);
        assert_eq!(report.exit_code(), 1);
        assert!(ui.has_error("Setup verification failed"));
    }

    #[test]
    fn installed_but_unbuilt_passes_with_build_hint() {
        let temp = installed_project();
        let config = VerifyConfig::default();
        let runner = healthy_runner();
        let mut ui = MockUI::new();

        let report = Verifier::new(temp.path(), &config, &runner)
            .with_platform(Platform::MacOs)
            .run(&mut ui);

        assert_eq!(report.exit_code(), 0);
        assert!(report.needs_build());
        assert_eq!(report.warnings().len(), 2);
        assert!(ui.has_message("Run \"pnpm run build\" to build the project"));
    }

    #[test]
    fn old_runtime_is_advisory() {
        let temp = installed_project();
        touch(temp.path(), "dist/main.js");
        touch(temp.path(), "static/js/main.js");
        let config = VerifyConfig::default();
        let runner = FakeRunner::new()
            .with_output("node --version", "v16.2.0")
            .with_output("pnpm --version", "9.1.0")
            .with_output("git --version", "git version 2.43.0");
        let mut ui = MockUI::new();

        let report = Verifier::new(temp.path(), &config, &runner)
            .with_platform(Platform::Linux)
            .run(&mut ui);

        assert!(ui.has_warning("Node.js 18+ recommended, you have v16.2.0"));
        assert!(!report.has_failures());
        assert!(!report.needs_build());
    }

    #[test]
    fn banner_uses_app_name() {
        let temp = TempDir::new().unwrap();
        let config = VerifyConfig {
            app_name: "Desk".to_string(),
            ..VerifyConfig::default()
        };
        let runner = healthy_runner();
        let mut ui = MockUI::new();

        let verifier = Verifier::new(temp.path(), &config, &runner);
        assert_eq!(verifier.root(), temp.path());
        verifier.run(&mut ui);

        assert!(ui.contains("🔍 Desk - Setup Verification"));
    }
}
