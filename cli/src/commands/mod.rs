//! Command implementations

pub mod build;
pub mod codex;
pub mod dockerfile;

use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::EngineError;
use crate::infra::assets;

/// Fail early when the engine control program is not on `PATH`.
///
/// # Errors
///
/// Returns [`EngineError::NotFound`] with the installation hint.
pub fn require_engine(program: &str) -> Result<()> {
    match which::which(program) {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "engine program found");
            Ok(())
        }
        Err(e) => {
            tracing::debug!(program, error = %e, "engine program lookup failed");
            Err(EngineError::NotFound {
                program: program.to_string(),
            }
            .into())
        }
    }
}

/// Template text from `file`, or the built-in template.
///
/// # Errors
///
/// Returns an error if `file` cannot be read.
pub fn load_template(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read template {}", path.display())),
        None => Ok(assets::default_template()?.to_string()),
    }
}
