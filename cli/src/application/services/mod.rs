//! Application services: use-case orchestration.
//!
//! Each service module implements a single use-case by composing domain logic
//! with port trait calls. Services import only from `crate::domain` and
//! `crate::application::ports`, never from `crate::infra`, `crate::commands`,
//! or `crate::output`.

pub mod engine;
pub mod image_build;
pub mod image_resolve;
pub mod launch;
pub mod session;
pub mod version;


use std::process::ExitStatus;

/// Human-readable exit description, e.g. `exit code 2`.
pub(crate) fn describe_exit(status: ExitStatus) -> String {
    status.code().map_or_else(
        || "terminated by a signal".to_string(),
        |code| format!("exit code {code}"),
    )
}
