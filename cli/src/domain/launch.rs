//! Run invocation assembly.

use crate::domain::image::ImageReference;
use crate::domain::mount::MountSpec;

/// Interactive shell used by `--shell`.
pub const SHELL_PATH: &str = "/bin/bash";

/// What the container runs once started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryChoice {
    Shell,
    /// The wrapped tool followed by verbatim passthrough arguments.
    Tool { path: String, args: Vec<String> },
}

impl EntryChoice {
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        match self {
            Self::Shell => vec![SHELL_PATH.to_string()],
            Self::Tool { path, args } => std::iter::once(path.clone())
                .chain(args.iter().cloned())
                .collect(),
        }
    }
}

/// Everything needed to start one container.
#[derive(Debug, Clone)]
pub struct LaunchSpec {
    pub name: String,
    pub image: ImageReference,
    pub mounts: Vec<MountSpec>,
    pub entry: EntryChoice,
}

impl LaunchSpec {
    /// Arguments following the engine program:
    /// `run --name <name> --rm -it <mounts...> <image> <entry...>`.
    #[must_use]
    pub fn run_args(&self) -> Vec<String> {
        let mut args = vec![
            "run".to_string(),
            "--name".to_string(),
            self.name.clone(),
            "--rm".to_string(),
            "-it".to_string(),
        ];
        args.extend(self.mounts.iter().flat_map(MountSpec::to_args));
        args.push(self.image.to_string());
        args.extend(self.entry.to_args());
        args
    }
}
