//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, UserInterface, VerifyTheme};

/// Writes report lines to stdout, styled when colors are enabled.
pub struct TerminalUI {
    term: Term,
    theme: VerifyTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI, styling output only if colors are enabled.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            VerifyTheme::new()
        } else {
            VerifyTheme::plain()
        };

        Self::with_theme(mode, theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: VerifyTheme) -> Self {
        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_banner(&mut self, title: &str) {
        writeln!(self.term, "{}\n", self.theme.format_banner(title)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
    }

    fn show_command(&mut self, command: &str) {
        writeln!(
            self.term,
            "  {}",
            self.theme.command.apply_to(format!("$ {}", command))
        )
        .ok();
    }
}

/// Create the UI for a run.
///
/// `no_color` forces the plain theme regardless of TTY detection.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    if no_color {
        Box::new(TerminalUI::with_theme(mode, VerifyTheme::plain()))
    } else {
        Box::new(TerminalUI::new(mode))
    }
}
