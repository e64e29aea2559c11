//! Shell command execution.

use crate::error::{Result, VerifyError};
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Standard output with surrounding whitespace removed.
    pub fn trimmed_stdout(&self) -> &str {
        self.stdout.trim()
    }

    /// Convert a non-zero exit into [`VerifyError::CommandFailed`].
    pub fn into_success(self, command: &str) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(VerifyError::CommandFailed {
                command: command.to_string(),
                code: self.exit_code,
            })
        }
    }
}

/// Runs external commands on behalf of checks.
///
/// Checks take a runner instead of spawning processes themselves so the
/// checklist can be driven with canned output in tests.
pub trait CommandRunner {
    /// Run `command` and capture its output.
    ///
    /// A command that starts but exits non-zero is `Ok` with
    /// `success == false`; a command that cannot be started is `Err`.
    fn run(&self, command: &str) -> Result<CommandResult>;
}

/// Runs commands through the platform shell in a fixed working directory.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    cwd: PathBuf,
}

impl ShellRunner {
    /// Create a runner that executes commands inside `cwd`.
    pub fn new(cwd: &Path) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
        }
    }

    /// The working directory commands run in.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<CommandResult> {
        execute(command, &self.cwd)
    }
}

/// The shell executable and its "run this string" flag.
pub fn shell_program() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}

/// Execute a shell command with stdout and stderr captured.
pub fn execute(command: &str, cwd: &Path) -> Result<CommandResult> {
    let start = Instant::now();
    let (shell, flag) = shell_program();

    tracing::debug!("Running `{}` in {}", command, cwd.display());

    let output = Command::new(shell)
        .arg(flag)
        .arg(command)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .with_context(|| format!("failed to start `{}` via {}", command, shell))?;

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}
