//! Image building: render the build file, run the build, reconcile tags.

use std::io::Write as _;
use std::path::Path;

use crate::application::ports::{BuildSpec, ImageStore, ProgressReporter, TemplateRenderer};
use crate::domain::{BuildError, ImageReference, Promotion, TemplateContext, ToolVersion};

use super::describe_exit;
use super::image_resolve::probe;

/// One build of `image` for `version`.
pub struct BuildRequest<'a> {
    /// Build-file template text.
    pub template: &'a str,
    pub context: TemplateContext,
    /// Repository to build; its tag is ignored.
    pub image: &'a ImageReference,
    pub version: &'a ToolVersion,
    /// Build context directory.
    pub build_dir: &'a Path,
    /// Append `--no-cache`.
    pub no_cache: bool,
}

/// Render, build and tag.
///
/// The image is built as both `<repo>:<version>` and `<repo>:latest`. The
/// rendered build file lives in a temporary file that is removed before this
/// function returns, on every path.
///
/// Returns the promotions that were needed after the build.
///
/// # Errors
///
/// - [`BuildError::Render`] if the template cannot be rendered.
/// - [`BuildError::TempFile`] if the build file cannot be written.
/// - [`BuildError::BuildFailed`] on a non-zero build exit.
/// - [`BuildError::Interrupted`] if the build was cancelled with Ctrl-C.
/// - [`BuildError::TagFailed`] if a tag promotion fails.
pub async fn build_image(
    store: &impl ImageStore,
    renderer: &impl TemplateRenderer,
    reporter: &impl ProgressReporter,
    request: &BuildRequest<'_>,
) -> Result<Vec<Promotion>, BuildError> {
    let rendered = renderer
        .render(request.template, &request.context)
        .map_err(|e| BuildError::Render(format!("{e:#}")))?;

    let pinned = request.image.pinned(request.version);
    let latest = request.image.latest();
    let tags = [pinned.clone(), latest.clone()];

    {
        let build_file = write_build_file(&rendered)?;
        reporter.step(&format!("building {pinned}"));
        let status = store
            .build(&BuildSpec {
                build_file: build_file.path(),
                context: request.build_dir,
                tags: &tags,
                no_cache: request.no_cache,
            })
            .await
            .map_err(|e| {
                if is_interrupted(&e) {
                    BuildError::Interrupted
                } else {
                    BuildError::BuildFailed(format!("{e:#}"))
                }
            })?;
        if !status.success() {
            return Err(BuildError::BuildFailed(describe_exit(status)));
        }
    }

    let promotions = reconcile_tags(store, reporter, &tags).await?;
    reporter.success(&format!("built {pinned}"));
    Ok(promotions)
}

/// Make every reference in `expected` resolvable.
///
/// The first reference that exists is the source; each missing one is
/// tagged from it. Nothing is tagged when none exists.
///
/// # Errors
///
/// Returns [`BuildError::TagFailed`] on the first failed tag command.
pub async fn reconcile_tags(
    store: &impl ImageStore,
    reporter: &impl ProgressReporter,
    expected: &[ImageReference],
) -> Result<Vec<Promotion>, BuildError> {
    let mut source = None;
    let mut missing = Vec::new();
    for reference in expected {
        if probe(store, reference).await.is_found() {
            source.get_or_insert(reference);
        } else {
            missing.push(reference);
        }
    }
    let Some(source) = source else {
        tracing::debug!("no expected tag is present after the build, skipping promotion");
        return Ok(Vec::new());
    };

    let mut applied = Vec::new();
    for to in missing {
        let promotion = Promotion {
            from: source.clone(),
            to: to.clone(),
        };
        promote(store, reporter, &promotion).await?;
        applied.push(promotion);
    }
    Ok(applied)
}

/// Tag `promotion.from` as `promotion.to`.
///
/// # Errors
///
/// Returns [`BuildError::TagFailed`] if the tag command fails or exits non-zero.
pub async fn promote(
    store: &impl ImageStore,
    reporter: &impl ProgressReporter,
    promotion: &Promotion,
) -> Result<(), BuildError> {
    let Promotion { from, to } = promotion;
    let failed = |reason: String| BuildError::TagFailed {
        from: from.to_string(),
        to: to.to_string(),
        reason,
    };
    let output = store
        .tag(from, to)
        .await
        .map_err(|e| failed(format!("{e:#}")))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        return Err(failed(if stderr.is_empty() {
            describe_exit(output.status)
        } else {
            stderr.to_string()
        }));
    }
    reporter.step(&format!("tagged {from} as {to}"));
    Ok(())
}

fn write_build_file(rendered: &str) -> Result<tempfile::NamedTempFile, BuildError> {
    let mut file = tempfile::Builder::new()
        .prefix("petrel-")
        .suffix(".Dockerfile")
        .tempfile()?;
    file.write_all(rendered.as_bytes())?;
    file.flush()?;
    Ok(file)
}

fn is_interrupted(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::Interrupted)
    })
}
