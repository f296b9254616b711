//! Error types for the OSINT explorer library.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can occur in the OSINT explorer library.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The tree document is not valid JSON or does not have the node shape.
    #[error("Malformed tree data: {0}")]
    Json(#[from] serde_json::Error),

    /// A tools.yaml file could not be parsed.
    #[error("Malformed YAML in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Theme configuration could not be parsed.
    #[error("Invalid theme configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Theme configuration could not be serialized.
    #[error("Cannot serialize theme configuration: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// A category directory is not named `NN-name`.
    #[error("Directory name {0:?} is not of the form NN-name")]
    InvalidDirectoryName(String),

    /// A tools.yaml file has no top-level `tools` list.
    #[error("{} has no `tools` list", .0.display())]
    MissingTools(PathBuf),

    /// No node carries the requested name.
    #[error("No node named {0:?}")]
    NodeNotFound(String),

    /// A command-line or API argument was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience result type for explorer operations.
pub type ExplorerResult<T> = Result<T, ExplorerError>;
