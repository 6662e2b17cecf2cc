//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;

/// Run the Codex CLI inside Apple `container` images built for its version
#[derive(Parser)]
#[command(
    name = "petrel",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log every external command (same as `RUST_LOG=debug`)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Answer every confirmation with its default
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the container image for the installed codex version
    Build(commands::build::BuildArgs),

    /// Run codex in a container, building the image when needed
    Codex(commands::codex::CodexArgs),

    /// Print the rendered Dockerfile template
    Dockerfile(commands::dockerfile::DockerfileArgs),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded or the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            quiet,
            no_color,
            verbose: _,
            yes,
            command,
        } = self;

        if let Command::Dockerfile(args) = &command {
            return commands::dockerfile::run(args);
        }

        let app = AppContext::new(&AppFlags {
            output: OutputFlags { no_color, quiet },
            behaviour: BehaviourFlags { yes },
        })?;

        match command {
            Command::Build(args) => commands::build::run(&app, &args).await,
            Command::Codex(args) => commands::codex::run(&app, args).await,
            Command::Dockerfile(args) => commands::dockerfile::run(&args),
        }
    }
}
