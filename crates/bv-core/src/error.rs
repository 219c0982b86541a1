use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BvError {
    #[error("Brand profile '{name}' not found")]
    BrandNotFound { name: String },
    #[error("Failed to read profile {path}: {source}")]
    ProfileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BvError>;
