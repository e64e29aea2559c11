//! Runtime version parsing.
//!
//! Version commands print all sorts of decoration around the number
//! (`v20.11.0`, `node v18.0.0 (lts)`), so parsing searches the output for
//! the first `v?MAJOR.MINOR.PATCH` match instead of requiring an exact string.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static RE_SEMVER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"v?(\d+)\.(\d+)\.(\d+)").expect("version pattern is valid")
});

/// A parsed `MAJOR.MINOR.PATCH` version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RuntimeVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl RuntimeVersion {
    /// Parse the first semantic-version-like triple found in `raw`.
    ///
    /// Returns `None` when nothing matches or a component overflows `u64`.
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = RE_SEMVER.captures(raw)?;
        Some(Self {
            major: caps[1].parse().ok()?,
            minor: caps[2].parse().ok()?,
            patch: caps[3].parse().ok()?,
        })
    }

    /// Whether the major component is at least `min_major`.
    pub fn meets_major(&self, min_major: u64) -> bool {
        self.major >= min_major
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
