//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Everything, plus the command behind each tool check.
    Verbose,
    /// Every status line and section header.
    #[default]
    Normal,
    /// Warnings, failures and the summary only.
    Quiet,
}

impl OutputMode {
    /// Pick the mode from the `--verbose` / `--quiet` flags. Quiet wins.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows passing checks and informational notes.
    pub fn shows_passes(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows section headers.
    pub fn shows_headers(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows the command behind tool checks.
    pub fn shows_commands(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
