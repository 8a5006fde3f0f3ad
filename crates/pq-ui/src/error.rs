//! Error types for the UI layer.

use thiserror::Error;

use pq_core::PqError;

/// Result type for UI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the controller and configuration layer.
#[derive(Debug, Error)]
pub enum Error {
    /// A state mutation was rejected by the model.
    #[error("domain error: {0}")]
    Domain(#[from] PqError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
