//! Dockerfile command: print the rendered build-file template.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::application::ports::TemplateRenderer;
use crate::domain::{BuildError, TemplateContext};
use crate::infra::template::TeraRenderer;

/// Arguments for the dockerfile command.
#[derive(Args)]
pub struct DockerfileArgs {
    /// Path to the Dockerfile template. Defaults to the built-in template.
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Entry point for `petrel dockerfile`.
///
/// Renders with the process environment and never contacts the engine.
///
/// # Errors
///
/// Returns an error if the template cannot be read or rendered.
pub fn run(args: &DockerfileArgs) -> Result<()> {
    let template = super::load_template(args.file.as_deref())?;
    let rendered = TeraRenderer
        .render(&template, &TemplateContext::Environment)
        .map_err(|e| BuildError::Render(format!("{e:#}")))?;
    println!("{rendered}");
    Ok(())
}
