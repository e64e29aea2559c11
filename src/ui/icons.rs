//! Status vocabulary for check output.
//!
//! `StatusKind` is the single set of status glyphs used by every status
//! line; [`VerifyTheme`](super::VerifyTheme) adds color around it.

use crate::checks::CheckStatus;

/// Status kinds a printed line can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Required check failed.
    Failed,
    /// Advisory problem.
    Warning,
}

impl StatusKind {
    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
        }
    }

    /// Format a status line without styling.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.icon(), msg)
    }
}

impl StatusKind {
    /// Glyph for a check status; notes carry none.
    pub fn for_status(status: CheckStatus) -> Option<Self> {
        match status {
            CheckStatus::Passed => Some(Self::Success),
            CheckStatus::Failed => Some(Self::Failed),
            CheckStatus::Warning => Some(Self::Warning),
            CheckStatus::Note => None,
        }
    }
}
