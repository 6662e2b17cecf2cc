//! Engine reconciliation: confirm the backing engine runs, start it if allowed.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use crate::application::ports::{EngineControl, ProgressReporter};
use crate::domain::{CommandTimeout, EngineError, EngineStatus};

use super::describe_exit;

/// Query the engine once and classify the answer.
///
/// Failing to run the query at all is [`EngineStatus::Unavailable`].
///
/// # Errors
///
/// Returns [`EngineError::Unresponsive`] when the query ran but was killed by
/// its timeout.
pub async fn probe_status(engine: &impl EngineControl) -> Result<EngineStatus, EngineError> {
    match engine.status().await {
        Ok(output) => {
            let text = String::from_utf8_lossy(&output.stdout);
            let status = EngineStatus::from_status_text(&text);
            tracing::debug!(?status, exit = ?output.status.code(), "engine status");
            Ok(status)
        }
        Err(e) => {
            tracing::debug!(error = %format!("{e:#}"), "engine status query failed");
            match e.chain().find_map(|c| c.downcast_ref::<CommandTimeout>()) {
                Some(timeout) => Err(EngineError::Unresponsive {
                    program: engine.program().to_string(),
                    secs: timeout.secs,
                }),
                None => Ok(EngineStatus::Unavailable),
            }
        }
    }
}

/// Make sure the engine is running before any image query, build, or launch.
///
/// A single start attempt is made when `auto_start` is set; the start command
/// is trusted to return once the engine is up.
///
/// # Errors
///
/// - [`EngineError::NotFound`] when the control program cannot be executed.
/// - [`EngineError::Unresponsive`] when the status query times out.
/// - [`EngineError::Stopped`] when it is stopped and `auto_start` is false.
/// - [`EngineError::StartFailed`] when the start command fails.
pub async fn ensure_running(
    engine: &impl EngineControl,
    reporter: &impl ProgressReporter,
    auto_start: bool,
) -> Result<(), EngineError> {
    let program = || engine.program().to_string();
    match probe_status(engine).await? {
        EngineStatus::Running => return Ok(()),
        EngineStatus::Unavailable => return Err(EngineError::NotFound { program: program() }),
        EngineStatus::Stopped if !auto_start => {
            return Err(EngineError::Stopped { program: program() });
        }
        EngineStatus::Stopped => {}
    }

    reporter.warn("Apple container subsystem is not running - starting it now…");
    let status = engine
        .start()
        .await
        .map_err(|e| EngineError::StartFailed(format!("{e:#}")))?;
    if !status.success() {
        return Err(EngineError::StartFailed(describe_exit(status)));
    }
    Ok(())
}
