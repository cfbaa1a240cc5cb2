//! Output path routing and build-root cleanup.
//!
//! This module provides:
//! - The project tree model (named subprojects with parent links)
//! - Resolution of per-subproject output directories beneath a shared root
//! - Idempotent removal of the shared build root

mod cleaner;
mod resolver;
mod tree;

pub use cleaner::{dir_size, CleanOutcome};
pub use resolver::PathRouter;
pub use tree::{ProjectNode, ProjectTree};
