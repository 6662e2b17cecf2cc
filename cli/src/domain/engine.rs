//! Backing engine status as derived from `container system status`.

/// Program name of the Apple container CLI.
pub const ENGINE_PROGRAM: &str = "container";

/// Installation hint shown when the engine program is missing.
pub const INSTALL_HINT: &str = "brew install container";

/// Engine status observed from a single status query. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    Running,
    Stopped,
    /// The control program could not be executed at all.
    Unavailable,
}

impl EngineStatus {
    /// Classify the text printed by the status query.
    ///
    /// Any output containing `running` (case-insensitive) counts as running;
    /// everything else is stopped.
    #[must_use]
    pub fn from_status_text(text: &str) -> Self {
        if text.to_ascii_lowercase().contains("running") {
            Self::Running
        } else {
            Self::Stopped
        }
    }
}
