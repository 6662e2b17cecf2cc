//! Image references, inspect metadata and the build decision.
//!
//! Pure types only. Everything here is computed per invocation; nothing is
//! stored.

use std::fmt;

use serde::Deserialize;

use crate::domain::version::ToolVersion;

/// The floating default tag.
pub const LATEST_TAG: &str = "latest";

// ── ImageReference ───────────────────────────────────────────────────────────

/// `repository:tag` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageReference {
    pub repository: String,
    pub tag: String,
}

impl ImageReference {
    #[must_use]
    pub fn new(repository: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            tag: tag.into(),
        }
    }

    /// Parse `repo[:tag]`. A missing tag means `latest`.
    ///
    /// Only a `:` after the last `/` separates a tag, so registry ports
    /// (`localhost:5000/codex`) stay part of the repository.
    #[must_use]
    pub fn parse(reference: &str) -> Self {
        let name_start = reference.rfind('/').map_or(0, |i| i + 1);
        match reference[name_start..].rfind(':') {
            Some(i) if name_start + i + 1 < reference.len() => Self::new(
                &reference[..name_start + i],
                &reference[name_start + i + 1..],
            ),
            Some(i) => Self::new(&reference[..name_start + i], LATEST_TAG),
            None => Self::new(reference, LATEST_TAG),
        }
    }

    /// Sibling reference tagged with the tool version.
    #[must_use]
    pub fn pinned(&self, version: &ToolVersion) -> Self {
        Self::new(self.repository.clone(), version.as_str())
    }

    /// Sibling reference tagged `latest`.
    #[must_use]
    pub fn latest(&self) -> Self {
        Self::new(self.repository.clone(), LATEST_TAG)
    }

    #[must_use]
    pub fn is_latest(&self) -> bool {
        self.tag == LATEST_TAG
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.repository, self.tag)
    }
}

// ── ImageMetadata ────────────────────────────────────────────────────────────

/// One record of the `images inspect` JSON array.
#[derive(Debug, Deserialize)]
struct InspectRecord {
    #[serde(rename = "RepoTags", default)]
    repo_tags: Vec<String>,
}

/// Result of probing one reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageMetadata {
    Found { repo_tags: Vec<String> },
    NotFound,
}

impl ImageMetadata {
    /// Interpret an inspect query.
    ///
    /// A failed query, blank output, unparsable JSON or an empty array all
    /// mean the image is absent. Tags are read from the first record.
    #[must_use]
    pub fn from_inspect(success: bool, stdout: &[u8]) -> Self {
        if !success {
            return Self::NotFound;
        }
        match serde_json::from_slice::<Vec<InspectRecord>>(stdout) {
            Ok(records) => records
                .into_iter()
                .next()
                .map_or(Self::NotFound, |r| Self::Found {
                    repo_tags: r.repo_tags,
                }),
            Err(_) => Self::NotFound,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Whether the image already carries `reference` among its RepoTags.
    #[must_use]
    pub fn carries(&self, reference: &ImageReference) -> bool {
        let wanted = reference.to_string();
        match self {
            Self::Found { repo_tags } => repo_tags.iter().any(|t| *t == wanted),
            Self::NotFound => false,
        }
    }
}

// ── BuildDecision ────────────────────────────────────────────────────────────

/// Re-tag `from` as `to` without rebuilding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promotion {
    pub from: ImageReference,
    pub to: ImageReference,
}

/// What must happen before a container can be launched.
///
/// The variants are exclusive: a decision either rebuilds because the pinned
/// tag is missing or promotes because an existing image already carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildDecision {
    /// A usable image exists; launch `launch` as is.
    NoAction { launch: ImageReference },
    /// No image exists at all; build `target` from scratch.
    Build { target: ImageReference },
    /// `latest` is outdated and the user asked for a rebuild; after the
    /// build, promote unless the new image already carries `to`.
    BuildAndPromote { promotion: Promotion },
    /// `latest` carries the pinned reference but the pinned probe missed.
    PromoteOnly { promotion: Promotion },
}

impl BuildDecision {
    #[must_use]
    pub fn needs_build(&self) -> bool {
        matches!(self, Self::Build { .. } | Self::BuildAndPromote { .. })
    }

    #[must_use]
    pub fn needs_promote(&self) -> bool {
        matches!(self, Self::PromoteOnly { .. })
    }
}
