use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum RouterError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Build root has not been set")]
    UnsetRoot,

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid project name '{0}'")]
    InvalidProjectName(String),

    #[error("Duplicate project name: {0}")]
    DuplicateProject(String),

    #[error("Unknown project: {0}")]
    UnknownProject(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RouterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ConfigError::Invalid("root_offset must not be empty".into());
        assert!(err.to_string().contains("root_offset"));
    }

    #[test]
    fn error_conversion() {
        let config_err = ConfigError::Invalid("test".into());
        let router_err: RouterError = config_err.into();
        assert!(matches!(router_err, RouterError::Config(_)));
    }

    #[test]
    fn unset_root_message() {
        let err = RouterError::UnsetRoot;
        assert!(err.to_string().contains("Build root"));
    }
}
