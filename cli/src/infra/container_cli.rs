//! Infrastructure adapter for the Apple `container` CLI.
//!
//! `ContainerCli<R>` routes every engine call through a `CommandRunner`.

use std::process::{ExitStatus, Output};

use anyhow::{Context, Result};

use crate::application::ports::{BuildSpec, CommandRunner, EngineControl, ImageStore};
use crate::domain::ImageReference;

/// Generic over `R: CommandRunner` so that tests can inject a mock runner
/// without spawning real processes.
pub struct ContainerCli<R: CommandRunner> {
    program: String,
    runner: R,
}

impl<R: CommandRunner> ContainerCli<R> {
    pub fn new(program: impl Into<String>, runner: R) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }
}

/// Arguments of `container build`, without the program name.
#[must_use]
pub fn build_args(spec: &BuildSpec<'_>) -> Vec<String> {
    let mut args = vec!["build".to_string()];
    if spec.no_cache {
        args.push("--no-cache".to_string());
    }
    for tag in spec.tags {
        args.push("--tag".to_string());
        args.push(tag.to_string());
    }
    args.push("--file".to_string());
    args.push(spec.build_file.display().to_string());
    args.push(spec.context.display().to_string());
    args
}

impl<R: CommandRunner> EngineControl for ContainerCli<R> {
    fn program(&self) -> &str {
        &self.program
    }

    async fn status(&self) -> Result<Output> {
        self.runner
            .run(&self.program, &["system", "status"])
            .await
            .context("container system status")
    }

    async fn start(&self) -> Result<ExitStatus> {
        self.runner
            .run_status(&self.program, &["system", "start"])
            .await
            .context("container system start")
    }
}

impl<R: CommandRunner> ImageStore for ContainerCli<R> {
    async fn inspect(&self, reference: &ImageReference) -> Result<Output> {
        let reference = reference.to_string();
        self.runner
            .run(&self.program, &["images", "inspect", &reference])
            .await
            .context("container images inspect")
    }

    async fn tag(&self, from: &ImageReference, to: &ImageReference) -> Result<Output> {
        let (from, to) = (from.to_string(), to.to_string());
        self.runner
            .run(&self.program, &["image", "tag", &from, &to])
            .await
            .context("container image tag")
    }

    async fn build(&self, spec: &BuildSpec<'_>) -> Result<ExitStatus> {
        let args = build_args(spec);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.runner
            .run_status(&self.program, &args)
            .await
            .context("container build")
    }
}
