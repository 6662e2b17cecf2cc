//! Host-to-container mounts and the per-repository cache key.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Repository bind target inside the container.
pub const CONTAINER_REPO_DIR: &str = "/home/linuxbrew/repo";
/// Shared package-fetch cache inside the container.
pub const CONTAINER_UV_CACHE_DIR: &str = "/home/linuxbrew/.uv_cache";
/// Isolated virtualenv, overlaid on the repository bind.
pub const CONTAINER_VENV_DIR: &str = "/home/linuxbrew/repo/.venv";

/// How the engine attaches the host path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountKind {
    /// `-v host:container`
    Bind,
    /// `--mount src=host,dst=container`
    Volume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountAccess {
    ReadWrite,
    ReadOnly,
}

/// One host directory exposed to the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountSpec {
    pub host: PathBuf,
    pub container: String,
    pub kind: MountKind,
    pub access: MountAccess,
}

impl MountSpec {
    #[must_use]
    pub fn bind(host: impl Into<PathBuf>, container: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            container: container.into(),
            kind: MountKind::Bind,
            access: MountAccess::ReadWrite,
        }
    }

    #[must_use]
    pub fn volume(host: impl Into<PathBuf>, container: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            container: container.into(),
            kind: MountKind::Volume,
            access: MountAccess::ReadWrite,
        }
    }

    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.access = MountAccess::ReadOnly;
        self
    }

    /// Arguments for `container run`.
    #[must_use]
    pub fn to_args(&self) -> [String; 2] {
        let host = self.host.display();
        match (self.kind, self.access) {
            (MountKind::Bind, MountAccess::ReadWrite) => {
                ["-v".to_string(), format!("{host}:{}", self.container)]
            }
            (MountKind::Bind, MountAccess::ReadOnly) => {
                ["-v".to_string(), format!("{host}:{}:ro", self.container)]
            }
            (MountKind::Volume, MountAccess::ReadWrite) => [
                "--mount".to_string(),
                format!("src={host},dst={}", self.container),
            ],
            (MountKind::Volume, MountAccess::ReadOnly) => [
                "--mount".to_string(),
                format!("src={host},dst={},readonly", self.container),
            ],
        }
    }
}

/// Host directories backing the standard session mounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPaths {
    /// Absolute path of the repository being worked on.
    pub repo_dir: PathBuf,
    /// Persistent tool data (credentials, history).
    pub persistent_dir: PathBuf,
    /// Destination of `persistent_dir` inside the container.
    pub dest_dir: String,
    /// Per-user cache root, e.g. `~/.cache/petrel`.
    pub cache_root: PathBuf,
}

impl SessionPaths {
    /// `<cache_root>/<repo>-<hash8>`
    #[must_use]
    pub fn repo_cache_dir(&self) -> PathBuf {
        self.cache_root.join(repo_cache_key(&self.repo_dir))
    }

    #[must_use]
    pub fn venv_cache_dir(&self) -> PathBuf {
        self.repo_cache_dir().join(".venv")
    }

    #[must_use]
    pub fn uv_cache_dir(&self) -> PathBuf {
        self.cache_root.join("uv_cache")
    }

    /// Repository bind, persistent data, shared fetch cache, isolated venv.
    #[must_use]
    pub fn mounts(&self) -> Vec<MountSpec> {
        vec![
            MountSpec::bind(&self.repo_dir, CONTAINER_REPO_DIR),
            MountSpec::volume(&self.persistent_dir, self.dest_dir.clone()),
            MountSpec::volume(self.uv_cache_dir(), CONTAINER_UV_CACHE_DIR),
            MountSpec::volume(self.venv_cache_dir(), CONTAINER_VENV_DIR),
        ]
    }
}

/// Repository name plus the first 8 hex chars of the SHA-256 of its path.
///
/// Two checkouts sharing a basename get distinct keys.
#[must_use]
pub fn repo_cache_key(repo_dir: &Path) -> String {
    let name = repo_dir
        .file_name()
        .map_or_else(|| "root".to_string(), |n| n.to_string_lossy().into_owned());
    let digest = Sha256::digest(repo_dir.to_string_lossy().as_bytes());
    format!("{name}-{}", &hex_encode(&digest)[..8])
}

/// Encode bytes as a lowercase hex string.
#[must_use]
pub fn hex_encode(bytes: &[u8]) -> String {
    use std::fmt::Write as _;
    bytes.iter().fold(String::new(), |mut s, b| {
        let _ = write!(s, "{b:02x}");
        s
    })
}
