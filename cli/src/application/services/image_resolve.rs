//! Image resolution: decide whether the image for a tool version must be
//! built, promoted, or can be used as is.
//!
//! Every lookup is a probe. A failed or unparsable inspect means "absent",
//! never a hard error.

use anyhow::Result;

use crate::application::ports::{ImageStore, ProgressReporter, UserPrompt};
use crate::domain::{BuildDecision, ImageMetadata, ImageReference, Promotion, ToolVersion};

/// Inspect one reference.
pub async fn probe(store: &impl ImageStore, reference: &ImageReference) -> ImageMetadata {
    match store.inspect(reference).await {
        Ok(output) => {
            let meta = ImageMetadata::from_inspect(output.status.success(), &output.stdout);
            tracing::debug!(%reference, found = meta.is_found(), "image probe");
            meta
        }
        Err(e) => {
            tracing::debug!(%reference, error = %format!("{e:#}"), "image inspect failed, treating as absent");
            ImageMetadata::NotFound
        }
    }
}

/// Decide what to do for `image` at `version`.
///
/// 1. Pinned tag present → launch it; `latest` is never looked at.
/// 2. Neither pinned nor `latest` present → full build.
/// 3. `latest` already lists the pinned tag → promote only.
/// 4. `latest` is outdated → ask; rebuild on yes, launch `latest` on no.
///
/// # Errors
///
/// Returns an error only if the confirmation prompt fails.
pub async fn resolve(
    store: &impl ImageStore,
    prompt: &impl UserPrompt,
    reporter: &impl ProgressReporter,
    image: &ImageReference,
    version: &ToolVersion,
) -> Result<BuildDecision> {
    let pinned = image.pinned(version);
    if probe(store, &pinned).await.is_found() {
        return Ok(BuildDecision::NoAction { launch: pinned });
    }

    let latest = image.latest();
    let latest_meta = probe(store, &latest).await;
    if !latest_meta.is_found() {
        return Ok(BuildDecision::Build { target: pinned });
    }

    let promotion = Promotion {
        from: latest.clone(),
        to: pinned.clone(),
    };
    if latest_meta.carries(&pinned) {
        return Ok(BuildDecision::PromoteOnly { promotion });
    }

    if prompt.confirm(
        &format!("Container image '{latest}' is outdated. Build it now?"),
        true,
    )? {
        return Ok(BuildDecision::BuildAndPromote { promotion });
    }

    reporter.warn(&format!(
        "Launching '{latest}', which was not built for {} {version}",
        image.repository
    ));
    Ok(BuildDecision::NoAction { launch: latest })
}
