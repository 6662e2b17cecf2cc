//! Implements `ProcessLauncher` by handing the terminal to the engine.

use anyhow::anyhow;

use crate::application::ports::ProcessLauncher;

/// Replaces the current process image on Unix.
///
/// Elsewhere the command runs as a child with inherited stdio and this
/// process exits with the child's code.
pub struct ExecLauncher;

impl ProcessLauncher for ExecLauncher {
    #[cfg(unix)]
    fn replace(&self, program: &str, args: &[String]) -> anyhow::Error {
        use std::os::unix::process::CommandExt;

        tracing::debug!(program, ?args, "exec");
        let err = std::process::Command::new(program).args(args).exec();
        anyhow!(err).context(format!("cannot execute {program}"))
    }

    #[cfg(not(unix))]
    fn replace(&self, program: &str, args: &[String]) -> anyhow::Error {
        tracing::debug!(program, ?args, "spawn");
        match std::process::Command::new(program).args(args).status() {
            Ok(status) => std::process::exit(status.code().unwrap_or(1)),
            Err(err) => anyhow!(err).context(format!("cannot execute {program}")),
        }
    }
}
