//! Error reporting - problem details for failed commands.

use board_core::error::DomainError;
use board_shared::ErrorResponse;

/// Command-line level failures that are not API errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Api(#[from] DomainError),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// The problem document a backend would answer with.
    pub fn to_problem(&self) -> ErrorResponse {
        match self {
            CliError::Api(err) => problem(err),
            CliError::Input(detail) => ErrorResponse::bad_request(detail.clone()),
            CliError::Output(_) => ErrorResponse::internal_error(),
        }
    }
}

/// Map an API failure to RFC 7807 problem details.
pub fn problem(err: &DomainError) -> ErrorResponse {
    match err {
        DomainError::NotFound { id } => {
            ErrorResponse::not_found(format!("Post with id {id} not found"))
        }
        DomainError::InvalidCredentials => {
            ErrorResponse::unauthorized("Invalid email or password")
        }
        DomainError::Unauthenticated => ErrorResponse::unauthorized("Please login first"),
        DomainError::Aborted => ErrorResponse::client_closed_request(),
        DomainError::Storage(e) => {
            tracing::error!(error = %e, "Storage failure");
            ErrorResponse::insufficient_storage(e.to_string())
        }
        DomainError::Internal(detail) => {
            tracing::error!("Internal error: {}", detail);
            ErrorResponse::internal_error()
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
