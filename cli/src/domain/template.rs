//! Substitution context for the build-file template.

use std::collections::BTreeMap;

use crate::domain::version::ToolVersion;

/// Template variable holding the resolved tool version.
pub const TOOL_VERSION_VAR: &str = "codex_version";

/// Where template variables come from. Always chosen explicitly by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateContext {
    /// The current process environment.
    Environment,
    /// Exactly these variables.
    Explicit(BTreeMap<String, String>),
    /// The process environment, with these variables taking precedence.
    Layered(BTreeMap<String, String>),
}

impl TemplateContext {
    /// Environment plus `codex_version`.
    #[must_use]
    pub fn for_tool_version(version: &ToolVersion) -> Self {
        Self::Layered(BTreeMap::from([(
            TOOL_VERSION_VAR.to_string(),
            version.to_string(),
        )]))
    }
}
