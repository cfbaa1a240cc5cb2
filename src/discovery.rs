//! Subproject discovery.
//!
//! Walks the project root looking for directories that carry a recognized
//! build manifest and turns them into a [`ProjectTree`]. An explicit name
//! list from configuration bypasses the walk entirely.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::Result;
use crate::router::{ProjectNode, ProjectTree};

/// Files whose presence marks a directory as a subproject.
pub const MANIFEST_FILES: &[&str] = &[
    "build.gradle",
    "build.gradle.kts",
    "pom.xml",
    "Cargo.toml",
    "package.json",
    "CMakeLists.txt",
];

/// Options for the discovery walk.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Maximum directory depth below the project root.
    pub max_depth: usize,
    /// Directory names to skip entirely.
    pub exclude: Vec<String>,
    /// Whether to follow symbolic links.
    pub follow_symlinks: bool,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            max_depth: 5,
            exclude: vec![".git".to_string(), "node_modules".to_string()],
            follow_symlinks: false,
        }
    }
}

/// Walk `root` and collect every subproject directory into a tree.
///
/// Nested subprojects get the nearest enclosing subproject as their parent.
/// The build root itself is never entered, so routed output can live inside
/// the project tree without being rediscovered as a subproject. Two
/// directories sharing a name anywhere in the tree is a hard error.
pub fn discover(
    root: &Path,
    options: &DiscoveryOptions,
    build_root: Option<&Path>,
) -> Result<ProjectTree> {
    let mut tree = ProjectTree::new(root);
    let mut found: Vec<(PathBuf, String)> = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(options.max_depth)
        .follow_links(options.follow_symlinks)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| should_visit(e, options, build_root));

    for entry in walker.flatten() {
        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if !has_manifest(path) {
            continue;
        }

        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };

        // Directories are yielded before their contents, so the nearest
        // enclosing subproject is already in `found`.
        let parent = found
            .iter()
            .rev()
            .find(|(p, _)| path.starts_with(p) && path != p)
            .map(|(_, n)| n.clone());

        tree.add(ProjectNode {
            name: name.clone(),
            path: path.to_path_buf(),
            parent,
        })?;
        found.push((path.to_path_buf(), name));
    }

    tracing::debug!(
        root = %root.display(),
        count = tree.len(),
        "Discovered subprojects"
    );

    Ok(tree)
}

/// Build a tree from an explicit name list, each name a directory directly
/// beneath the project root.
pub fn from_names(root: &Path, names: &[String]) -> Result<ProjectTree> {
    let mut tree = ProjectTree::new(root);

    for name in names {
        tree.add(ProjectNode {
            name: name.clone(),
            path: root.join(name),
            parent: None,
        })?;
    }

    Ok(tree)
}

fn should_visit(entry: &DirEntry, options: &DiscoveryOptions, build_root: Option<&Path>) -> bool {
    if let Some(build_root) = build_root {
        if entry.path() == build_root {
            return false;
        }
    }

    let name = entry.file_name().to_string_lossy();
    !options.exclude.iter().any(|ex| name == ex.as_str())
}

fn has_manifest(path: &Path) -> bool {
    MANIFEST_FILES.iter().any(|f| path.join(f).is_file())
}
