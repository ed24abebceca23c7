//! Application error types.

use domain::DomainError;
use thiserror::Error;

/// Errors that stop a pizzeria run.
#[derive(Debug, Error)]
pub enum AppError {
    /// Domain logic error.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A ticket could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
