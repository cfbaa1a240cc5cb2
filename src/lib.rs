//! Outroute - a build output directory router for multi-module projects
//!
//! This crate provides functionality for:
//! - Routing each subproject's build output to an isolated directory
//!   beneath one shared root
//! - Discovering subprojects from build manifests in a project tree
//! - Removing the shared build root in one idempotent action

pub mod cli;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod error;
pub mod router;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, RouterError};
pub use router::{CleanOutcome, PathRouter, ProjectNode, ProjectTree};
