//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, the
//! `container` CLI adapter, template rendering, filesystem access, and
//! embedded assets.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod assets;
pub mod command_runner;
pub mod config;
pub mod container_cli;
pub mod fs;
pub mod process;
pub mod template;
pub mod tool_probe;
