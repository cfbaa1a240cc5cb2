//! Idempotent removal of the shared build root.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, RouterError};

/// Outcome of a clean invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    /// The build root was removed.
    Removed { freed_bytes: u64 },
    /// The build root did not exist; nothing to do.
    AlreadyClean,
}

impl CleanOutcome {
    pub fn freed_bytes(&self) -> u64 {
        match self {
            CleanOutcome::Removed { freed_bytes } => *freed_bytes,
            CleanOutcome::AlreadyClean => 0,
        }
    }
}

/// Delete `root` and everything beneath it.
///
/// A missing root is a successful no-op. Permission failures and other
/// filesystem errors are surfaced to the caller, never swallowed.
pub fn clean_root(root: &Path) -> Result<CleanOutcome> {
    if !root.exists() {
        tracing::debug!(root = %root.display(), "Build root absent, nothing to clean");
        return Ok(CleanOutcome::AlreadyClean);
    }

    let freed_bytes = dir_size(root);

    match fs::remove_dir_all(root) {
        Ok(()) => {
            tracing::info!(root = %root.display(), freed_bytes, "Removed build root");
            Ok(CleanOutcome::Removed { freed_bytes })
        }
        // Lost a race with another deleter; the root is gone either way.
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(CleanOutcome::AlreadyClean),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            Err(RouterError::PermissionDenied(root.to_path_buf()))
        }
        Err(e) => Err(RouterError::Io {
            path: root.to_path_buf(),
            source: e,
        }),
    }
}

/// Total size in bytes of all files beneath `path`.
pub fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .flatten()
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}
