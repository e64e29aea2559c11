//! Rendering of sections and the final summary.

use crate::config::VerifyConfig;
use crate::ui::{hints, OutputMode, StatusKind, UserInterface};

use super::outcome::{Report, SectionReport};

/// Width of the separator printed before the summary.
pub const SEPARATOR_WIDTH: usize = 50;

/// Print one section according to the UI's output mode.
pub fn show_section(ui: &mut dyn UserInterface, section: &SectionReport) {
    let mode = ui.output_mode();

    if mode.shows_headers() {
        ui.show_header(section.section.title());
    }

    for outcome in &section.outcomes {
        if !is_visible(mode, StatusKind::for_status(outcome.status)) {
            continue;
        }

        match StatusKind::for_status(outcome.status) {
            Some(kind) => ui.status(kind, &outcome.line()),
            None => ui.message(&outcome.line()),
        }

        if mode.shows_commands() {
            if let Some(command) = &outcome.command {
                ui.show_command(command);
            }
        }
    }
}

fn is_visible(mode: OutputMode, kind: Option<StatusKind>) -> bool {
    match kind {
        Some(StatusKind::Failed) | Some(StatusKind::Warning) => true,
        Some(StatusKind::Success) | None => mode.shows_passes(),
    }
}

/// Print the separator, verdict and suggestions.
pub fn show_summary(ui: &mut dyn UserInterface, config: &VerifyConfig, report: &Report) {
    ui.message("");
    ui.message(&"=".repeat(SEPARATOR_WIDTH));
    ui.message("");

    if report.has_failures() {
        ui.error("Setup verification failed. Please fix the issues above.");
        ui.message("");
        ui.message("Common solutions:");
        show_bullets(ui, &hints::remediation(config));
    } else {
        ui.success("All checks passed! Your setup looks good.");
        ui.message("");
        ui.message("Next steps:");
        show_bullets(ui, &hints::next_steps(config, report.needs_build()));
    }

    ui.message("");
}

fn show_bullets(ui: &mut dyn UserInterface, items: &[String]) {
    for item in items {
        ui.message(&format!("  • {}", item));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{CheckOutcome, Section};
    use crate::ui::{Line, MockUI};

    fn sample_section() -> SectionReport {
        let mut section = SectionReport::new(Section::Prerequisites);
        section.push(
            CheckOutcome::passed("Node.js version")
                .with_detail("v20.0.0")
                .with_command("node --version"),
        );
        section.push(CheckOutcome::warning("Warning: something"));
        section.push(
            CheckOutcome::failed("pnpm version")
                .with_detail("Not found or error")
                .with_command("pnpm --version"),
        );
        section.push(CheckOutcome::note("Platform: linux"));
        section
    }

    #[test]
    fn normal_mode_shows_everything_but_commands() {
        let mut ui = MockUI::new();
        show_section(&mut ui, &sample_section());

        assert_eq!(
            ui.lines(),
            &[
                Line::Header("📦 Checking Prerequisites...".to_string()),
                Line::Success("Node.js version: v20.0.0".to_string()),
                Line::Warning("Warning: something".to_string()),
                Line::Error("pnpm version: Not found or error".to_string()),
                Line::Message("Platform: linux".to_string()),
            ]
        );
    }

    #[test]
    fn verbose_mode_shows_commands_after_lines() {
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        show_section(&mut ui, &sample_section());

        assert_eq!(ui.commands(), vec!["node --version", "pnpm --version"]);
        assert_eq!(ui.lines()[2], Line::Command("node --version".to_string()));
    }

    #[test]
    fn quiet_mode_hides_passes_notes_and_headers() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        show_section(&mut ui, &sample_section());

        assert!(ui.headers().is_empty());
        assert!(ui.successes().is_empty());
        assert!(ui.messages().is_empty());
        assert_eq!(ui.warnings().len(), 1);
        assert_eq!(ui.errors().len(), 1);
    }

    #[test]
    fn failed_summary_lists_remediation() {
        let mut section = SectionReport::new(Section::SourceFiles);
        section.push(CheckOutcome::failed("package.json not found"));
        let mut report = Report::new();
        report.push(section);

        let mut ui = MockUI::new();
        show_summary(&mut ui, &VerifyConfig::default(), &report);

        assert!(ui.has_message(&"=".repeat(50)));
        assert!(ui.has_error("Setup verification failed"));
        assert!(ui.has_message("Common solutions:"));
        assert!(ui.has_message("  • Run \"pnpm install\" to install dependencies"));
        assert!(!ui.has_message("Next steps:"));
    }

    #[test]
    fn passing_summary_suggests_build_when_needed() {
        let mut report = Report::new();
        report.set_needs_build(true);

        let mut ui = MockUI::new();
        show_summary(&mut ui, &VerifyConfig::default(), &report);

        assert!(ui.has_success("All checks passed!"));
        assert!(ui.has_message("Next steps:"));
        assert!(ui.has_message("pnpm run build"));
        assert!(ui.has_message("pnpm dev"));
    }

    #[test]
    fn passing_summary_without_build_suggestion() {
        let report = Report::new();
        let mut ui = MockUI::new();
        show_summary(&mut ui, &VerifyConfig::default(), &report);

        assert!(!ui.has_message("run build"));
        assert!(ui.has_message("pnpm dist"));
    }
}
