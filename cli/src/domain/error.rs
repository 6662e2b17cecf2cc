//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator at the command boundary.

use thiserror::Error;

use super::engine::INSTALL_HINT;

// ── Engine errors ─────────────────────────────────────────────────────────────

/// `program` is the configured engine control program, so every hint names
/// the command the operator would actually run.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(
        "The '{program}' CLI was not found. Install it first (e.g. `{hint}`) \
         and make sure you are running macOS with the Apple container subsystem.",
        hint = INSTALL_HINT
    )]
    NotFound { program: String },

    #[error("Apple container subsystem is not running. Start it with: {program} system start")]
    Stopped { program: String },

    #[error("'{program} system status' did not answer within {secs}s; the engine may be hung")]
    Unresponsive { program: String, secs: u64 },

    #[error("Failed to start the Apple container subsystem: {0}")]
    StartFailed(String),
}

/// A captured query killed after outliving its timeout.
#[derive(Debug, Error)]
#[error("{program} timed out after {secs}s")]
pub struct CommandTimeout {
    pub program: String,
    pub secs: u64,
}

// ── Version errors ────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("could not determine the installed {program} version: {reason}")]
    QueryFailed { program: String, reason: String },
}

// ── Build errors ──────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to render the build file template: {0}")]
    Render(String),

    #[error("failed to write the rendered build file: {0}")]
    TempFile(#[from] std::io::Error),

    #[error("image build failed ({0})")]
    BuildFailed(String),

    #[error("failed to tag {from} as {to}: {reason}")]
    TagFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("image build interrupted")]
    Interrupted,
}

// ── Launch errors ─────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("cannot create mount directory {path}: {reason}")]
    Directory { path: String, reason: String },

    #[error("failed to launch the container: {0}")]
    LaunchFailed(String),
}

// ── Session outcomes ──────────────────────────────────────────────────────────

/// Early exits chosen by the user rather than failures of the system.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Image '{0}' is required but was not built.")]
    UserDeclined(String),
}
