use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the catalog engine
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read specification from {}: {source}", path.display())]
    Retrieval {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse specification: {0}")]
    Parse(String),

    #[error("document declares neither `swagger` nor `openapi`")]
    UnrecognizedDocument,

    #[error("failed to encode catalog tree: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode catalog tree: {0}")]
    Decode(String),

    #[error("operation leaf `{0}` cannot have children")]
    LeafHasChildren(String),

    #[error("node `{0}` is not an operation leaf")]
    NotAnOperation(String),

    #[error("no {method} operation under `{path}`")]
    OperationNotFound { path: String, method: String },

    #[error("invalid request uri `{uri}`: {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("storage error at {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
