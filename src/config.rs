use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub router: RouterConfig,
    pub discovery: DiscoveryConfig,
    pub mirrors: Vec<Mirror>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Fixed build root; overrides `root_offset` when set
    pub build_root: Option<PathBuf>,
    /// Offset from the project root used when `build_root` is unset
    pub root_offset: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Explicit subproject names; skips manifest discovery when non-empty
    pub subprojects: Vec<String>,
    /// Maximum discovery depth
    pub max_depth: usize,
    /// Directory names to skip during discovery
    pub exclude: Vec<String>,
}

/// A named package-repository mirror.
///
/// Consulted by the host build system's dependency resolution; the router
/// itself never reads this list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mirror {
    pub name: String,
    pub url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            router: RouterConfig::default(),
            discovery: DiscoveryConfig::default(),
            mirrors: vec![],
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            build_root: None,
            root_offset: PathBuf::from("../build"),
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            subprojects: vec![],
            max_depth: 5,
            exclude: vec![".git".to_string(), "node_modules".to_string()],
        }
    }
}

impl Config {
    /// Load configuration from an explicit path, or from the default
    /// location if one exists. Falls back to defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Default config file location: `<config dir>/outroute/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("outroute").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.router.root_offset.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("root_offset must not be empty".into()));
        }
        if self.discovery.max_depth == 0 {
            return Err(ConfigError::Invalid("max_depth must be at least 1".into()));
        }
        for mirror in &self.mirrors {
            if mirror.name.is_empty() || mirror.url.is_empty() {
                return Err(ConfigError::Invalid(
                    "mirror entries need both a name and a url".into(),
                ));
            }
        }
        Ok(())
    }

    /// Effective build root for a project rooted at `project_root`.
    ///
    /// A fixed `build_root` wins; otherwise `root_offset` is joined onto
    /// the project root.
    pub fn build_root(&self, project_root: &Path) -> PathBuf {
        match &self.router.build_root {
            Some(root) => root.clone(),
            None => project_root.join(&self.router.root_offset),
        }
    }
}
