//! Version probe for the wrapped tool installed on the host.

use std::process::Output;

use anyhow::Result;

use crate::application::ports::{CommandRunner, ToolProbe};

/// Runs `<program> --version` through a `CommandRunner`.
pub struct CodexProbe<R: CommandRunner> {
    program: String,
    runner: R,
}

impl<R: CommandRunner> CodexProbe<R> {
    pub fn new(program: impl Into<String>, runner: R) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }
}

impl<R: CommandRunner> ToolProbe for CodexProbe<R> {
    fn program(&self) -> &str {
        &self.program
    }

    async fn version(&self) -> Result<Output> {
        self.runner.run(&self.program, &["--version"]).await
    }
}
