//! Wrapped tool version token.

use std::fmt;

/// Version string reported by the wrapped tool, e.g. `1.2.3`.
///
/// Accepted verbatim: no semantic version validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToolVersion(String);

impl ToolVersion {
    /// Extract the version from `<name> <version>` style output.
    ///
    /// Returns the last whitespace-separated token of the trimmed text, or
    /// `None` when the output is blank.
    #[must_use]
    pub fn from_version_output(output: &str) -> Option<Self> {
        output
            .split_whitespace()
            .next_back()
            .map(|token| Self(token.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
