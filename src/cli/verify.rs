//! The verify command.
//!
//! Loads and validates configuration, runs the [`Verifier`] against the
//! project root, and turns the report into an exit code.

use std::path::{Path, PathBuf};

use crate::checks::{Report, Verifier};
use crate::config::{load_config, validate};
use crate::error::{Result, VerifyError};
use crate::shell::{CommandRunner, ShellRunner};
use crate::ui::UserInterface;

/// Exit code for configuration and setup errors.
pub const CONFIG_ERROR_EXIT_CODE: i32 = 2;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Map a verification report to a result.
    pub fn from_report(report: &Report) -> Self {
        if report.has_failures() {
            Self::failure(report.exit_code())
        } else {
            Self::success()
        }
    }
}

/// The verify command implementation.
pub struct VerifyCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl VerifyCommand {
    /// Create a new verify command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Execute with a specific command runner.
    pub fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        runner: &dyn CommandRunner,
    ) -> Result<CommandResult> {
        if !self.project_root.is_dir() {
            return Err(VerifyError::ProjectRootNotFound {
                path: self.project_root.clone(),
            });
        }

        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        validate(&config)?;

        let report = Verifier::new(&self.project_root, &config, runner).run(ui);
        Ok(CommandResult::from_report(&report))
    }
}

impl Command for VerifyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let runner = ShellRunner::new(&self.project_root);
        self.execute_with(ui, &runner)
    }
}
