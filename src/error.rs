use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Registry root does not exist: {}", .path.display())]
    MissingRoot { path: PathBuf },

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("YAML configuration error: {0}")]
    YamlConfig(#[from] serde_yaml_ng::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RegistryError {
    /// Attach a path to an IO error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RegistryError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
