//! Application context: unified state passed to every command handler.
//!
//! `AppContext` carries output styling, the loaded configuration, and the
//! interaction mode, and builds the infrastructure adapters commands need.

use std::time::Duration;

use anyhow::Result;

use crate::application::ports::UserPrompt;
use crate::domain::PetrelConfig;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::container_cli::ContainerCli;
use crate::infra::tool_probe::CodexProbe;
use crate::output::{OutputContext, TerminalReporter};

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Skip interactive prompts (also set by `CI` / `PETREL_YES` env vars).
    pub yes: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Settings from the config file, defaults filled in.
    pub config: PetrelConfig,
    /// When `true`, skip interactive prompts and use defaults.
    ///
    /// Set when `--yes` / `-y` is passed, or when the `CI` or `PETREL_YES`
    /// environment variables are present.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let config = YamlConfigStore.load()?;
        Ok(Self::with_config(flags, config))
    }

    /// Construct an `AppContext` around an already loaded config.
    #[must_use]
    pub fn with_config(flags: &AppFlags, config: PetrelConfig) -> Self {
        let ci_env = std::env::var("CI").is_ok() || std::env::var("PETREL_YES").is_ok();
        Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            config,
            non_interactive: flags.behaviour.yes || ci_env,
        }
    }

    /// Progress reporter writing to this context's terminal.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    fn runner(&self) -> TokioCommandRunner {
        TokioCommandRunner::new(Duration::from_secs(self.config.engine.query_timeout_secs))
    }

    /// Adapter for the configured `container` program.
    #[must_use]
    pub fn engine(&self) -> ContainerCli<TokioCommandRunner> {
        ContainerCli::new(self.config.engine.program.clone(), self.runner())
    }

    /// Version probe for the configured host tool.
    #[must_use]
    pub fn tool(&self) -> CodexProbe<TokioCommandRunner> {
        CodexProbe::new(self.config.tool.program.clone(), self.runner())
    }

    /// Ask the user for confirmation.
    ///
    /// When `non_interactive` is `true` (CI, `--yes` flag, or `PETREL_YES` env),
    /// returns `default` immediately without prompting.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            tracing::debug!(prompt, default, "non-interactive, using default answer");
            return Ok(default);
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}

impl UserPrompt for AppContext {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        AppContext::confirm(self, prompt, default)
    }
}
