//! Build command: build the image for the installed tool version.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::ProgressReporter;
use crate::application::services::image_build::{self, BuildRequest};
use crate::application::services::{engine, version};
use crate::domain::{ImageReference, TemplateContext};
use crate::infra::template::TeraRenderer;

/// Arguments for the build command.
#[derive(Args)]
pub struct BuildArgs {
    /// Image repository to build (a `:tag` suffix is ignored) [default: codex]
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Path to the Dockerfile template. Defaults to the built-in template.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Build context directory
    #[arg(long, default_value = ".")]
    pub context: PathBuf,

    /// Rebuild without using cached layers
    #[arg(long)]
    pub rebuild: bool,

    /// Fail instead of starting a stopped container subsystem
    #[arg(long)]
    pub no_auto_start: bool,
}

/// Entry point for `petrel build`.
///
/// # Errors
///
/// Returns an error if the engine is unavailable, the tool version cannot be
/// determined, or the build or tagging fails.
pub async fn run(app: &AppContext, args: &BuildArgs) -> Result<()> {
    super::require_engine(&app.config.engine.program)?;

    let container = app.engine();
    let tool = app.tool();
    let reporter = app.reporter();
    let auto_start = app.config.engine.auto_start && !args.no_auto_start;

    engine::ensure_running(&container, &reporter, auto_start).await?;
    let version = version::resolve_version(&tool).await?;

    let template = super::load_template(args.file.as_deref())?;
    let image = ImageReference::parse(args.tag.as_deref().unwrap_or(&app.config.image.name));
    let request = BuildRequest {
        template: &template,
        context: TemplateContext::for_tool_version(&version),
        image: &image,
        version: &version,
        build_dir: &args.context,
        no_cache: args.rebuild,
    };

    image_build::build_image(&container, &TeraRenderer, &reporter, &request).await?;
    reporter.success(&format!(
        "Built {} and {}",
        image.pinned(&version),
        image.latest()
    ));
    Ok(())
}
