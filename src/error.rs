//! Library error type

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the library
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that abort a build
#[derive(Error, Debug)]
pub enum Error {
    #[error("posts directory not found: {0:?}")]
    PostsDirMissing(PathBuf),

    #[error("failed to read directory {path:?}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read content file {path:?}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path:?}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy asset {from:?} -> {to:?}")]
    CopyAsset {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render template {name}")]
    Template {
        name: String,
        #[source]
        source: tera::Error,
    },

    #[error("failed to serialize search index")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize feed")]
    Feed(#[from] rss::Error),

    /// Returned by a build step attempted after the build has already failed
    #[error("a previous build step failed")]
    Aborted,

    #[error("invalid config file {path:?}")]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}

/// Why a config file could not be loaded
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
