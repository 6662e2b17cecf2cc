//! Session preparation for `petrel codex`: engine, version, image.
//!
//! Each step completes before the next starts. The tool version is resolved
//! once and used for every tag and for the launch reference.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{
    ContainerEngine, ProgressReporter, TemplateRenderer, ToolProbe, UserPrompt,
};
use crate::domain::{BuildDecision, ImageReference, SessionError, TemplateContext};

use super::image_build::{self, BuildRequest};
use super::image_resolve;

/// Inputs for [`prepare_image`].
pub struct PrepareRequest<'a> {
    /// Repository to run; a tag suffix is ignored.
    pub image: &'a ImageReference,
    pub auto_start: bool,
    /// Template used when a build is needed.
    pub template: &'a str,
    /// Build context used when a build is needed.
    pub build_dir: &'a Path,
}

/// Make a usable image available and return the reference to launch.
///
/// # Errors
///
/// Propagates engine, version, build and tag errors unchanged, and returns
/// [`SessionError::UserDeclined`] when the operator refuses to build a
/// missing image.
pub async fn prepare_image(
    engine: &impl ContainerEngine,
    tool: &impl ToolProbe,
    renderer: &impl TemplateRenderer,
    prompt: &impl UserPrompt,
    reporter: &impl ProgressReporter,
    request: &PrepareRequest<'_>,
) -> Result<ImageReference> {
    super::engine::ensure_running(engine, reporter, request.auto_start).await?;
    let version = super::version::resolve_version(tool).await?;

    let decision =
        image_resolve::resolve(engine, prompt, reporter, request.image, &version).await?;
    tracing::debug!(?decision, "image decision");

    let build = BuildRequest {
        template: request.template,
        context: TemplateContext::for_tool_version(&version),
        image: request.image,
        version: &version,
        build_dir: request.build_dir,
        no_cache: false,
    };

    match decision {
        BuildDecision::NoAction { launch } => Ok(launch),
        BuildDecision::Build { target } => {
            let repository = &request.image.repository;
            if !prompt.confirm(
                &format!("Container image '{repository}' not found. Build it now?"),
                true,
            )? {
                return Err(SessionError::UserDeclined(repository.clone()).into());
            }
            image_build::build_image(engine, renderer, reporter, &build).await?;
            Ok(target)
        }
        BuildDecision::BuildAndPromote { promotion } => {
            image_build::build_image(engine, renderer, reporter, &build).await?;
            Ok(promotion.to)
        }
        BuildDecision::PromoteOnly { promotion } => {
            image_build::promote(engine, reporter, &promotion).await?;
            Ok(promotion.to)
        }
    }
}
