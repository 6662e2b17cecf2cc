//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod engine;
pub mod error;
pub mod image;
pub mod launch;
pub mod mount;
pub mod template;
pub mod version;

pub use config::PetrelConfig;
pub use engine::EngineStatus;
pub use error::{
    BuildError, CommandTimeout, EngineError, LaunchError, SessionError, VersionError,
};
pub use image::{BuildDecision, ImageMetadata, ImageReference, Promotion};
pub use launch::{EntryChoice, LaunchSpec};
pub use mount::{MountSpec, SessionPaths};
pub use template::TemplateContext;
pub use version::ToolVersion;
