//! Filesystem infrastructure: implements `LocalFs` and resolves host paths.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::LocalFs;

/// Production filesystem implementation of `LocalFs`.
pub struct HostFs;

impl LocalFs for HostFs {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("creating directory {}", path.display()))
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))
}

/// Root of the per-repository caches, `~/.cache/petrel` unless configured.
///
/// # Errors
///
/// Returns an error if neither `configured` nor the home directory is known.
pub fn cache_root(configured: Option<&Path>) -> Result<PathBuf> {
    match configured {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(home_dir()?.join(".cache").join("petrel")),
    }
}

/// Host directory mounted over the tool's state directory, `~/.codex-container`
/// unless configured.
///
/// # Errors
///
/// Returns an error if neither `configured` nor the home directory is known.
pub fn persistent_dir(configured: Option<&Path>) -> Result<PathBuf> {
    match configured {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(home_dir()?.join(".codex-container")),
    }
}

/// Absolute form of the repository directory handed to the container.
///
/// # Errors
///
/// Returns an error if `path` does not exist.
pub fn canonical_repo_dir(path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("cannot resolve repository directory {}", path.display()))
}
