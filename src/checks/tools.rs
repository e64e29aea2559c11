//! Command-version checks and the runtime version floor.

use crate::config::{RuntimeConfig, ToolConfig, VerifyConfig};
use crate::environment::RuntimeVersion;
use crate::shell::CommandRunner;

use super::outcome::{CheckOutcome, CheckStatus, Section, SectionReport};

/// Run every configured tool check, adding the floor check after the runtime.
pub fn check_tools(config: &VerifyConfig, runner: &dyn CommandRunner) -> SectionReport {
    let mut report = SectionReport::new(Section::Prerequisites);

    for tool in &config.tools {
        let outcome = check_tool(tool, runner);
        let runtime_output = (tool.name == config.runtime.tool
            && outcome.status == CheckStatus::Passed)
            .then(|| outcome.detail.clone().unwrap_or_default());
        report.push(outcome);

        if let Some(raw) = runtime_output {
            if let Some(warning) = check_runtime_floor(&raw, &config.runtime) {
                report.push(warning);
            }
        }
    }

    report
}

/// Run one tool's version command.
///
/// A command that cannot start and one that exits non-zero both fail.
pub fn check_tool(tool: &ToolConfig, runner: &dyn CommandRunner) -> CheckOutcome {
    match runner
        .run(&tool.command)
        .and_then(|result| result.into_success(&tool.command))
    {
        Ok(result) => {
            tracing::debug!("Tool check '{}' took {:?}", tool.name, result.duration);
            CheckOutcome::passed(&tool.label)
                .with_detail(result.trimmed_stdout())
                .with_command(&tool.command)
        }
        Err(e) => {
            tracing::debug!("Tool check '{}' failed: {}", tool.name, e);
            CheckOutcome::failed(&tool.label)
                .with_detail("Not found or error")
                .with_command(&tool.command)
        }
    }
}

/// Compare a runtime version string against the configured floor.
///
/// Returns an advisory warning when the version is too old or cannot be
/// parsed, `None` when it is fine.
pub fn check_runtime_floor(raw: &str, runtime: &RuntimeConfig) -> Option<CheckOutcome> {
    match RuntimeVersion::parse(raw) {
        Some(version) if version.meets_major(runtime.min_major) => None,
        Some(_) => Some(CheckOutcome::warning(format!(
            "Warning: {} {}+ recommended, you have {}",
            runtime.name, runtime.min_major, raw
        ))),
        None => Some(CheckOutcome::warning(format!(
            "Warning: Could not parse {} version format",
            runtime.name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::FakeRunner;

    #[test]
    fn passing_tool_reports_trimmed_output() {
        let runner = FakeRunner::new().with_output("git --version", "git version 2.43.0\n");
        let tool = ToolConfig::new("git", "git --version", "Git version");

        let outcome = check_tool(&tool, &runner);
        assert_eq!(outcome.status, CheckStatus::Passed);
        assert_eq!(outcome.line(), "Git version: git version 2.43.0");
    }

    #[test]
    fn missing_tool_fails() {
        let runner = FakeRunner::new();
        let tool = ToolConfig::new("pnpm", "pnpm --version", "pnpm version");

        let outcome = check_tool(&tool, &runner);
        assert_eq!(outcome.status, CheckStatus::Failed);
        assert_eq!(outcome.line(), "pnpm version: Not found or error");
    }

    #[test]
    fn non_zero_exit_fails() {
        let runner = FakeRunner::new().with_exit("pnpm --version", 1);
        let tool = ToolConfig::new("pnpm", "pnpm --version", "pnpm version");

        assert_eq!(check_tool(&tool, &runner).status, CheckStatus::Failed);
    }

    #[test]
    fn old_runtime_warns() {
        let warning = check_runtime_floor("v16.2.0", &RuntimeConfig::default()).unwrap();
        assert_eq!(warning.status, CheckStatus::Warning);
        assert_eq!(
            warning.label,
            "Warning: Node.js 18+ recommended, you have v16.2.0"
        );
    }

    #[test]
    fn current_runtime_is_quiet() {
        assert!(check_runtime_floor("v18.0.0", &RuntimeConfig::default()).is_none());
        assert!(check_runtime_floor("v22.3.1", &RuntimeConfig::default()).is_none());
    }

    #[test]
    fn unparseable_runtime_warns() {
        let warning = check_runtime_floor("nodejs", &RuntimeConfig::default()).unwrap();
        assert_eq!(warning.status, CheckStatus::Warning);
        assert!(warning.label.contains("Could not parse Node.js version"));
    }

    #[test]
    fn floor_warning_follows_runtime_line() {
        let runner = FakeRunner::new()
            .with_output("node --version", "v16.2.0")
            .with_output("pnpm --version", "9.1.0")
            .with_output("git --version", "git version 2.43.0");

        let report = check_tools(&VerifyConfig::default(), &runner);
        let statuses: Vec<_> = report.outcomes.iter().map(|o| o.status).collect();
        assert_eq!(
            statuses,
            vec![
                CheckStatus::Passed,
                CheckStatus::Warning,
                CheckStatus::Passed,
                CheckStatus::Passed,
            ]
        );
        assert!(!report.has_failures());
    }

    #[test]
    fn floor_is_skipped_when_runtime_missing() {
        let runner = FakeRunner::new()
            .with_output("pnpm --version", "9.1.0")
            .with_output("git --version", "git version 2.43.0");

        let report = check_tools(&VerifyConfig::default(), &runner);
        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn floor_is_skipped_when_disabled() {
        let mut config = VerifyConfig::default();
        config.runtime.tool = String::new();
        let runner = FakeRunner::new()
            .with_output("node --version", "v12.0.0")
            .with_output("pnpm --version", "9.1.0")
            .with_output("git --version", "git version 2.43.0");

        let report = check_tools(&config, &runner);
        assert_eq!(report.warning_count(), 0);
    }
}
