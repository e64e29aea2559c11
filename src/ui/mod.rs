//! Terminal output for verification reports.
//!
//! This module provides:
//! - [`UserInterface`] trait so reports can be captured in tests
//! - [`TerminalUI`] writing styled lines to stdout
//! - [`MockUI`] recording every line for assertions
//! - [`StatusKind`] glyphs, [`VerifyTheme`] styles and [`hints`] text
//!
//! # Example
//!
//! ```
//! use verify_setup::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Checking Dependencies...");
//! ui.success("node_modules directory exists");
//! assert!(ui.has_success("node_modules"));
//! ```

pub mod hints;
pub mod icons;
pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::{Line, MockUI};
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, VerifyTheme};

/// Trait for report output.
///
/// Implementations print what they are given; deciding what is visible in
/// a given [`OutputMode`] is the caller's job.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display a passing check.
    fn success(&mut self, msg: &str);

    /// Display an advisory warning.
    fn warning(&mut self, msg: &str);

    /// Display a failure.
    fn error(&mut self, msg: &str);

    /// Show the run banner.
    fn show_banner(&mut self, title: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Show the command a check ran.
    fn show_command(&mut self, command: &str);

    /// Display a status line of the given kind.
    fn status(&mut self, kind: StatusKind, msg: &str) {
        match kind {
            StatusKind::Success => self.success(msg),
            StatusKind::Failed => self.error(msg),
            StatusKind::Warning => self.warning(msg),
        }
    }
}
