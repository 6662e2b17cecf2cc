//! Wrapped tool version resolution.

use crate::application::ports::ToolProbe;
use crate::domain::{ToolVersion, VersionError};

use super::describe_exit;

/// Run the tool's version query and take the last output token.
///
/// # Errors
///
/// Returns [`VersionError::QueryFailed`] if the tool cannot be executed,
/// exits non-zero, or prints nothing.
pub async fn resolve_version(tool: &impl ToolProbe) -> Result<ToolVersion, VersionError> {
    let failed = |reason: String| VersionError::QueryFailed {
        program: tool.program().to_string(),
        reason,
    };

    let output = tool.version().await.map_err(|e| failed(format!("{e:#}")))?;
    if !output.status.success() {
        return Err(failed(describe_exit(output.status)));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let version = ToolVersion::from_version_output(&stdout)
        .ok_or_else(|| failed("empty version output".to_string()))?;
    tracing::debug!(%version, "resolved tool version");
    Ok(version)
}
