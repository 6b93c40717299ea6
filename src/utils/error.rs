//! Error handling for ytembed

use thiserror::Error;

/// Main error type for the server and configuration layers.
///
/// Rendering itself never fails; these cover everything around it.
#[derive(Debug, Error)]
pub enum YtEmbedError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, YtEmbedError>;
