//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion, both per kind and as one ordered transcript.
//!
//! # Example
//!
//! ```
//! use verify_setup::ui::{Line, MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Platform: linux");
//! ui.error("package.json not found");
//!
//! assert!(ui.has_error("package.json"));
//! assert_eq!(ui.lines()[0], Line::Message("Platform: linux".to_string()));
//! ```

use super::{OutputMode, UserInterface};

/// One captured line of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Message(String),
    Success(String),
    Warning(String),
    Error(String),
    Banner(String),
    Header(String),
    Command(String),
}

impl Line {
    /// The text of the line, whatever its kind.
    pub fn text(&self) -> &str {
        match self {
            Line::Message(s)
            | Line::Success(s)
            | Line::Warning(s)
            | Line::Error(s)
            | Line::Banner(s)
            | Line::Header(s)
            | Line::Command(s) => s,
        }
    }
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    lines: Vec<Line>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Every captured line in output order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    fn texts(&self, pick: fn(&Line) -> Option<&String>) -> Vec<String> {
        self.lines.iter().filter_map(pick).cloned().collect()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> Vec<String> {
        self.texts(|l| match l {
            Line::Message(s) => Some(s),
            _ => None,
        })
    }

    /// Get all captured success lines.
    pub fn successes(&self) -> Vec<String> {
        self.texts(|l| match l {
            Line::Success(s) => Some(s),
            _ => None,
        })
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> Vec<String> {
        self.texts(|l| match l {
            Line::Warning(s) => Some(s),
            _ => None,
        })
    }

    /// Get all captured errors.
    pub fn errors(&self) -> Vec<String> {
        self.texts(|l| match l {
            Line::Error(s) => Some(s),
            _ => None,
        })
    }

    /// Get all captured section headers.
    pub fn headers(&self) -> Vec<String> {
        self.texts(|l| match l {
            Line::Header(s) => Some(s),
            _ => None,
        })
    }

    /// Get all commands shown.
    pub fn commands(&self) -> Vec<String> {
        self.texts(|l| match l {
            Line::Command(s) => Some(s),
            _ => None,
        })
    }

    /// Check if a message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages().iter().any(|m| m.contains(msg))
    }

    /// Check if a success containing `msg` was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes().iter().any(|m| m.contains(msg))
    }

    /// Check if a warning containing `msg` was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings().iter().any(|m| m.contains(msg))
    }

    /// Check if an error containing `msg` was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors().iter().any(|m| m.contains(msg))
    }

    /// Check if any line of any kind contains `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.lines.iter().any(|l| l.text().contains(text))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.lines.push(Line::Message(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.lines.push(Line::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(Line::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.lines.push(Line::Error(msg.to_string()));
    }

    fn show_banner(&mut self, title: &str) {
        self.lines.push(Line::Banner(title.to_string()));
    }

    fn show_header(&mut self, title: &str) {
        self.lines.push(Line::Header(title.to_string()));
    }

    fn show_command(&mut self, command: &str) {
        self.lines.push(Line::Command(command.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::StatusKind;

    #[test]
    fn captures_lines_in_order() {
        let mut ui = MockUI::new();
        ui.show_header("Checking Source Files...");
        ui.success("src/main.ts");
        ui.error("tsconfig.json not found");

        assert_eq!(
            ui.lines(),
            &[
                Line::Header("Checking Source Files...".to_string()),
                Line::Success("src/main.ts".to_string()),
                Line::Error("tsconfig.json not found".to_string()),
            ]
        );
    }

    #[test]
    fn status_routes_by_kind() {
        let mut ui = MockUI::new();
        ui.status(StatusKind::Success, "a");
        ui.status(StatusKind::Warning, "b");
        ui.status(StatusKind::Failed, "c");

        assert_eq!(ui.successes(), vec!["a"]);
        assert_eq!(ui.warnings(), vec!["b"]);
        assert_eq!(ui.errors(), vec!["c"]);
    }

    #[test]
    fn has_helpers_match_substrings() {
        let mut ui = MockUI::new();
        ui.warning("dist/ directory not found");
        ui.show_command("git --version");

        assert!(ui.has_warning("dist/"));
        assert!(!ui.has_error("dist/"));
        assert_eq!(ui.commands(), vec!["git --version"]);
        assert!(ui.contains("git --version"));
    }

    #[test]
    fn with_mode_sets_mode() {
        let ui = MockUI::with_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
        assert_eq!(MockUI::new().output_mode(), OutputMode::Normal);
    }
}
