//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::{ExitStatus, Output};

use anyhow::Result;

use crate::domain::{ImageReference, TemplateContext};

// ── Value Types ───────────────────────────────────────────────────────────────

/// Arguments of one image build.
pub struct BuildSpec<'a> {
    /// Rendered build file.
    pub build_file: &'a Path,
    /// Build context directory.
    pub context: &'a Path,
    /// Every reference the built image is tagged with.
    pub tags: &'a [ImageReference],
    /// Skip cached layers.
    pub no_cache: bool,
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds the
    /// runner's query timeout. On timeout the child is killed.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with inherited stdio and return its exit status.
    ///
    /// No timeout. Ctrl-C kills the child and returns an error.
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus>;
}

// ── Engine Ports ──────────────────────────────────────────────────────────────

/// Backing engine lifecycle.
#[allow(async_fn_in_trait)]
pub trait EngineControl {
    /// Control program name, used in error messages.
    fn program(&self) -> &str;
    /// Query the engine status. `Err` means the control program could not run.
    async fn status(&self) -> Result<Output>;
    /// Start the engine, streaming its output to the terminal.
    async fn start(&self) -> Result<ExitStatus>;
}

/// Image cache queries and mutations.
#[allow(async_fn_in_trait)]
pub trait ImageStore {
    /// Inspect one reference; the raw JSON is interpreted by the caller.
    async fn inspect(&self, reference: &ImageReference) -> Result<Output>;
    /// Tag `from` as `to`.
    async fn tag(&self, from: &ImageReference, to: &ImageReference) -> Result<Output>;
    /// Build an image, streaming build output to the terminal.
    async fn build(&self, spec: &BuildSpec<'_>) -> Result<ExitStatus>;
}

/// Composite trait: any type implementing both sub-traits is a `ContainerEngine`.
pub trait ContainerEngine: EngineControl + ImageStore {}

/// Blanket implementation: any type implementing both sub-traits is a `ContainerEngine`.
impl<T> ContainerEngine for T where T: EngineControl + ImageStore {}

// ── Wrapped Tool Port ─────────────────────────────────────────────────────────

/// Version query of the wrapped tool on the host.
#[allow(async_fn_in_trait)]
pub trait ToolProbe {
    /// Program name, used in error messages.
    fn program(&self) -> &str;
    /// Run the tool's version flag and capture its output.
    async fn version(&self) -> Result<Output>;
}

// ── Template Port ─────────────────────────────────────────────────────────────

/// Renders the build-file template.
pub trait TemplateRenderer {
    /// Substitute `context` into `template`.
    ///
    /// # Errors
    ///
    /// Returns an error on template syntax errors or undefined variables.
    fn render(&self, template: &str, context: &TemplateContext) -> Result<String>;
}

// ── Launch Port ───────────────────────────────────────────────────────────────

/// Transfers control to the container run command.
pub trait ProcessLauncher {
    /// Replace the current process with `program args...`.
    ///
    /// Returns only when the replacement could not be started; the returned
    /// value is the reason.
    fn replace(&self, program: &str, args: &[String]) -> anyhow::Error;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Host filesystem operations needed before launch.
pub trait LocalFs {
    /// Create a directory and all missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<()>;
}

// ── Interaction Ports ─────────────────────────────────────────────────────────

/// Yes/no questions put to the operator.
pub trait UserPrompt {
    /// Ask `prompt`, returning `default` when the operator just presses enter.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait: no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
