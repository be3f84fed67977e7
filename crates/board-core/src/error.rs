//! Domain-level error types.

use thiserror::Error;

use crate::ports::{AuthError, StorageError};

/// Caller-facing failures of the post board API.
///
/// Everything except `Storage` and `Internal` is an expected condition the
/// caller reports to the end user.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found: {id}")]
    NotFound { id: String },

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not authenticated")]
    Unauthenticated,

    #[error("Request aborted")]
    Aborted,

    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Post not found: {id}")]
    NotFound { id: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { id } => DomainError::NotFound { id },
            RepoError::Storage(e) => DomainError::Storage(e),
        }
    }
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => DomainError::InvalidCredentials,
            AuthError::TokenExpired | AuthError::InvalidToken(_) => DomainError::Unauthenticated,
            AuthError::TokenIssue(msg) => DomainError::Internal(msg),
        }
    }
}
