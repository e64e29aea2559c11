//! Shell command execution.

pub mod command;

pub use command::{execute, shell_program, CommandResult, CommandRunner, ShellRunner};
