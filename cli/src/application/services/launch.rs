//! Container launch: prepare host directories and hand over the process.

use std::convert::Infallible;

use crate::application::ports::{LocalFs, ProcessLauncher, ProgressReporter};
use crate::domain::{LaunchError, LaunchSpec};

/// Replace the current process with `<engine_program> run ...`.
///
/// Every host-side mount source is created first. On success this never
/// returns; the only way out is a failure to start the replacement.
///
/// # Errors
///
/// - [`LaunchError::Directory`] if a mount source cannot be created.
/// - [`LaunchError::LaunchFailed`] if the run command cannot be started.
pub fn launch(
    fs: &impl LocalFs,
    launcher: &impl ProcessLauncher,
    reporter: &impl ProgressReporter,
    engine_program: &str,
    spec: &LaunchSpec,
) -> Result<Infallible, LaunchError> {
    for mount in &spec.mounts {
        fs.create_dir_all(&mount.host)
            .map_err(|e| LaunchError::Directory {
                path: mount.host.display().to_string(),
                reason: format!("{e:#}"),
            })?;
    }

    let args = spec.run_args();
    let printable: Vec<&str> = std::iter::once(engine_program)
        .chain(args.iter().map(String::as_str))
        .collect();
    reporter.step(&format!("Executing: {}", shell_words::join(printable)));

    let err = launcher.replace(engine_program, &args);
    Err(LaunchError::LaunchFailed(format!("{err:#}")))
}
