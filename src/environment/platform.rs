//! Operating-system classification.

use std::fmt;

/// Platform category used to select platform-specific checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    /// Any other OS identifier, kept verbatim for display.
    Other(String),
}

impl Platform {
    /// Detect the platform this binary was compiled for.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Classify an OS identifier.
    ///
    /// Accepts Rust's `std::env::consts::OS` names as well as the Node.js
    /// `process.platform` spellings (`win32`, `darwin`).
    pub fn from_os(os: &str) -> Self {
        match os.to_lowercase().as_str() {
            "windows" | "win32" => Platform::Windows,
            "macos" | "darwin" => Platform::MacOs,
            "linux" => Platform::Linux,
            _ => Platform::Other(os.to_string()),
        }
    }

    /// The identifier printed in the platform section.
    pub fn identifier(&self) -> &str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
            Platform::Other(os) => os,
        }
    }

    /// Human-readable name for recognized platforms.
    pub fn display_name(&self) -> Option<&'static str> {
        match self {
            Platform::Windows => Some("Windows"),
            Platform::MacOs => Some("macOS"),
            Platform::Linux => Some("Linux"),
            Platform::Other(_) => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
