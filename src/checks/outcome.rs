//! Check outcomes and the run report.
//!
//! A run produces one [`SectionReport`] per checklist phase. The
//! [`Report`] keeps them in order and decides the verdict at the end: any
//! [`CheckStatus::Failed`] outcome fails the run, nothing else does.

/// The result of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Requirement met.
    Passed,
    /// Required check failed; fails the run.
    Failed,
    /// Advisory problem; reported but never fails the run.
    Warning,
    /// Informational line with no verdict.
    Note,
}

impl CheckStatus {
    /// Whether this status fails the run.
    pub fn is_failure(self) -> bool {
        matches!(self, CheckStatus::Failed)
    }
}

/// One printed line of the checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// What was checked, or the full message for notes and warnings.
    pub label: String,
    pub status: CheckStatus,
    /// Extra text printed after the label (e.g. captured tool output).
    pub detail: Option<String>,
    /// Command the check ran, if any.
    pub command: Option<String>,
}

impl CheckOutcome {
    fn new(label: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            label: label.into(),
            status,
            detail: None,
            command: None,
        }
    }

    pub fn passed(label: impl Into<String>) -> Self {
        Self::new(label, CheckStatus::Passed)
    }

    pub fn failed(label: impl Into<String>) -> Self {
        Self::new(label, CheckStatus::Failed)
    }

    pub fn warning(label: impl Into<String>) -> Self {
        Self::new(label, CheckStatus::Warning)
    }

    pub fn note(label: impl Into<String>) -> Self {
        Self::new(label, CheckStatus::Note)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// The text printed after the status glyph.
    pub fn line(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{}: {}", self.label, detail),
            None => self.label.clone(),
        }
    }
}

/// Checklist phases, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Prerequisites,
    Dependencies,
    BuildStatus,
    Platform,
    SourceFiles,
}

impl Section {
    /// Header printed before the section.
    pub fn title(self) -> &'static str {
        match self {
            Section::Prerequisites => "📦 Checking Prerequisites...",
            Section::Dependencies => "📚 Checking Dependencies...",
            Section::BuildStatus => "🔨 Checking Build Status...",
            Section::Platform => "💻 Platform-Specific Checks...",
            Section::SourceFiles => "📄 Checking Source Files...",
        }
    }
}

/// Outcomes of one checklist phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReport {
    pub section: Section,
    pub outcomes: Vec<CheckOutcome>,
}

impl SectionReport {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    /// Outcomes with the given status.
    pub fn with_status(&self, status: CheckStatus) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(move |o| o.status == status)
    }

    pub fn failure_count(&self) -> usize {
        self.with_status(CheckStatus::Failed).count()
    }

    pub fn warning_count(&self) -> usize {
        self.with_status(CheckStatus::Warning).count()
    }

    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }
}

/// Everything a verification run found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    sections: Vec<SectionReport>,
    needs_build: bool,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, section: SectionReport) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[SectionReport] {
        &self.sections
    }

    /// The report for `section`, if it ran.
    pub fn section(&self, section: Section) -> Option<&SectionReport> {
        self.sections.iter().find(|s| s.section == section)
    }

    /// Every warning, in run order.
    pub fn warnings(&self) -> Vec<&CheckOutcome> {
        self.sections
            .iter()
            .flat_map(|s| s.with_status(CheckStatus::Warning))
            .collect()
    }

    pub fn failure_count(&self) -> usize {
        self.sections.iter().map(SectionReport::failure_count).sum()
    }

    pub fn has_failures(&self) -> bool {
        self.sections.iter().any(SectionReport::has_failures)
    }

    /// Whether build artifacts were missing.
    pub fn needs_build(&self) -> bool {
        self.needs_build
    }

    pub fn set_needs_build(&mut self, needs_build: bool) {
        self.needs_build = needs_build;
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> i32 {
        if self.has_failures() {
            1
        } else {
            0
        }
    }
}
