//! Canned command runner for unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::Result;
use crate::shell::{CommandResult, CommandRunner};

/// Answers commands from a table; unknown commands fail to start.
#[derive(Debug, Default)]
pub struct FakeRunner {
    responses: HashMap<String, CommandResult>,
    calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, command: &str, stdout: &str) -> Self {
        self.responses.insert(
            command.to_string(),
            CommandResult::success(stdout.to_string(), String::new(), Duration::ZERO),
        );
        self
    }

    pub fn with_exit(mut self, command: &str, code: i32) -> Self {
        self.responses.insert(
            command.to_string(),
            CommandResult::failure(Some(code), String::new(), String::new(), Duration::ZERO),
        );
        self
    }

    /// Commands run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, command: &str) -> Result<CommandResult> {
        self.calls.borrow_mut().push(command.to_string());
        self.responses
            .get(command)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("{}: command not found", command).into())
    }
}
