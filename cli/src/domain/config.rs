//! Configuration schema stored in `~/.petrel/config.yaml`.
//!
//! Pure types only: no I/O. Every field has a default so an empty or
//! partial file is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::engine::ENGINE_PROGRAM;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PetrelConfig {
    pub engine: EngineConfig,
    pub image: ImageConfig,
    pub tool: ToolConfig,
    pub run: RunConfig,
    pub cache: CacheConfig,
    /// Host directory persisting tool data. `~/.codex-container` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_dir: Option<PathBuf>,
}

/// Backing engine settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Control program, `container` by default.
    pub program: String,
    /// Start the engine when it is stopped.
    pub auto_start: bool,
    /// Upper bound for status, inspect, tag and version queries.
    pub query_timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: ENGINE_PROGRAM.to_string(),
            auto_start: true,
            query_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ImageConfig {
    /// Image repository, `codex` by default.
    pub name: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            name: "codex".to_string(),
        }
    }
}

/// Wrapped tool settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToolConfig {
    /// Host program queried for `--version`.
    pub program: String,
    /// Tool path inside the container.
    pub container_path: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: "codex".to_string(),
            container_path: "/home/linuxbrew/.linuxbrew/bin/codex".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RunConfig {
    /// Container instance name.
    pub name: String,
    /// Destination of the persistent directory inside the container.
    pub dest_dir: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            name: "codex-test".to_string(),
            dest_dir: "/home/linuxbrew/.codex".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache root. `~/.cache/petrel` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}
