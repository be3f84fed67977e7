//! Authentication ports.

use chrono::{DateTime, Utc};

use crate::domain::User;

/// Claims carried by a bearer token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: String,
    pub email: String,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
}

impl TokenClaims {
    /// Expiry as a UTC time; `None` if `exp` is out of range.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

impl From<TokenClaims> for User {
    fn from(claims: TokenClaims) -> Self {
        User::new(claims.user_id, claims.email)
    }
}

/// Token service trait for bearer tokens.
pub trait TokenService: Send + Sync {
    /// Issue a token for a user.
    fn generate_token(&self, user: &User) -> Result<String, AuthError>;

    /// Validate and decode a token.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token could not be issued: {0}")]
    TokenIssue(String),
}
