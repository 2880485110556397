//! Error types for the dongnae ecosystem.

use thiserror::Error;

/// Errors that can occur in dongnae operations.
#[derive(Error, Debug)]
pub enum DongnaeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Favorites storage error: {0}")]
    Favorites(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for dongnae operations.
pub type DongnaeResult<T> = Result<T, DongnaeError>;
