//! Resolution of per-subproject output directories.

use std::path::{Path, PathBuf};

use crate::error::{Result, RouterError};
use crate::router::cleaner::{self, CleanOutcome};
use crate::router::tree::ProjectNode;

/// Routes every subproject's build output beneath one shared root.
///
/// The root is held by the router itself; it is set once, before any
/// resolution, and stays fixed for the run.
#[derive(Debug, Default)]
pub struct PathRouter {
    root: Option<PathBuf>,
}

impl PathRouter {
    /// Create a router with no build root configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router with the build root already set.
    pub fn with_root(path: impl Into<PathBuf>) -> Result<Self> {
        let mut router = Self::new();
        router.set_root(path)?;
        Ok(router)
    }

    /// Set the shared build root.
    ///
    /// Must be called before [`resolve_output`](Self::resolve_output) or
    /// [`clean`](Self::clean). The path may be absolute or relative to the
    /// current working directory.
    pub fn set_root(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        validate_root(&path)?;
        self.root = Some(path);
        Ok(())
    }

    /// The configured build root.
    pub fn root(&self) -> Result<&Path> {
        self.root.as_deref().ok_or(RouterError::UnsetRoot)
    }

    /// Output directory for one subproject: build root joined with the
    /// subproject name.
    ///
    /// Pure computation, no filesystem access.
    pub fn resolve_output(&self, node: &ProjectNode) -> Result<PathBuf> {
        Ok(self.root()?.join(&node.name))
    }

    /// Remove the build root and everything beneath it.
    ///
    /// A missing root is a successful no-op.
    pub fn clean(&self) -> Result<CleanOutcome> {
        cleaner::clean_root(self.root()?)
    }
}

fn validate_root(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(RouterError::InvalidPath("path is empty".into()));
    }
    if path.as_os_str().as_encoded_bytes().contains(&0) {
        return Err(RouterError::InvalidPath(
            "path contains a NUL byte".into(),
        ));
    }
    Ok(())
}
