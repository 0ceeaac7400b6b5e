//! Common error types for the sketch classifier

use thiserror::Error;

/// Common result type for classifier operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared across the classifier crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error (wraps serde_json::Error)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Incoming image could not be decoded or normalized
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Model artifact missing or failed to load at startup
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Inference engine failure
    #[error("Model error: {0}")]
    Model(String),

    /// Model output length does not match the label set
    #[error("Label mismatch: model produced {output} scores for {labels} labels")]
    LabelMismatch { output: usize, labels: usize },
}
