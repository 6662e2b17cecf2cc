//! Codex command: run the tool inside a container built for its version.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::launch::launch;
use crate::application::services::session::{PrepareRequest, prepare_image};
use crate::domain::{EntryChoice, ImageReference, LaunchSpec, SessionPaths};
use crate::infra::{assets, fs, process::ExecLauncher, template::TeraRenderer};

/// Arguments for the codex command.
#[derive(Args)]
pub struct CodexArgs {
    /// Container name [default: codex-test]
    #[arg(short, long)]
    pub name: Option<String>,

    /// Host directory persisting tool data [default: ~/.codex-container]
    #[arg(long)]
    pub persistent_dir: Option<PathBuf>,

    /// Where the persistent directory is mounted in the container
    /// [default: /home/linuxbrew/.codex]
    #[arg(long)]
    pub dest_dir: Option<String>,

    /// Repository to mount into the container
    #[arg(long, default_value = ".")]
    pub repo_dir: PathBuf,

    /// Image repository to run (a `:tag` suffix is ignored) [default: codex]
    #[arg(long)]
    pub image: Option<String>,

    /// Path of the tool inside the container
    /// [default: /home/linuxbrew/.linuxbrew/bin/codex]
    #[arg(long)]
    pub codex_path: Option<String>,

    /// Open an interactive shell instead of the tool
    #[arg(long)]
    pub shell: bool,

    /// Fail instead of starting a stopped container subsystem
    #[arg(long)]
    pub no_auto_start: bool,

    /// Arguments passed verbatim to the tool
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "EXTRA")]
    pub extra: Vec<String>,
}

/// Entry point for `petrel codex`.
///
/// Only returns on failure: on success the process is replaced by the
/// container run command.
///
/// # Errors
///
/// Returns an error if the engine is unavailable, the version cannot be
/// determined, the user declines a required build, or the launch fails.
pub async fn run(app: &AppContext, args: CodexArgs) -> Result<()> {
    let config = &app.config;
    super::require_engine(&config.engine.program)?;

    // Bad paths are rejected before the engine is touched.
    let paths = SessionPaths {
        repo_dir: fs::canonical_repo_dir(&args.repo_dir)?,
        persistent_dir: fs::persistent_dir(
            args.persistent_dir
                .as_deref()
                .or(config.persistent_dir.as_deref()),
        )?,
        dest_dir: args.dest_dir.unwrap_or_else(|| config.run.dest_dir.clone()),
        cache_root: fs::cache_root(config.cache.root.as_deref())?,
    };

    let container = app.engine();
    let tool = app.tool();
    let reporter = app.reporter();
    let template = assets::default_template()?;
    let image = ImageReference::parse(args.image.as_deref().unwrap_or(&config.image.name));

    let launch_image = prepare_image(
        &container,
        &tool,
        &TeraRenderer,
        app,
        &reporter,
        &PrepareRequest {
            image: &image,
            auto_start: config.engine.auto_start && !args.no_auto_start,
            template,
            build_dir: std::path::Path::new("."),
        },
    )
    .await?;

    let entry = if args.shell {
        EntryChoice::Shell
    } else {
        EntryChoice::Tool {
            path: args
                .codex_path
                .unwrap_or_else(|| config.tool.container_path.clone()),
            args: args.extra,
        }
    };

    let spec = LaunchSpec {
        name: args.name.unwrap_or_else(|| config.run.name.clone()),
        image: launch_image,
        mounts: paths.mounts(),
        entry,
    };

    match launch(
        &fs::HostFs,
        &ExecLauncher,
        &reporter,
        &config.engine.program,
        &spec,
    )? {}
}
