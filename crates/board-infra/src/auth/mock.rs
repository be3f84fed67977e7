//! Mock login - a single hard-coded account.

use std::sync::Arc;

use board_core::domain::{Session, User};
use board_core::ports::{AuthError, TokenClaims, TokenService};

pub const MOCK_USER_ID: &str = "user-123";
pub const MOCK_EMAIL: &str = "jinworld13@gmail.com";
pub const MOCK_PASSWORD: &str = "123";

/// Accepts exactly one email/password pair and issues bearer tokens for it.
pub struct MockAuthService {
    tokens: Arc<dyn TokenService>,
    user: User,
    password: String,
}

impl MockAuthService {
    pub fn new(tokens: Arc<dyn TokenService>) -> Self {
        Self {
            tokens,
            user: User::new(MOCK_USER_ID, MOCK_EMAIL),
            password: MOCK_PASSWORD.to_string(),
        }
    }

    pub fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email != self.user.email || password != self.password {
            tracing::debug!("Rejected login attempt");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.generate_token(&self.user)?;
        tracing::info!(user_id = %self.user.id, "User logged in");

        Ok(Session {
            token,
            user: self.user.clone(),
        })
    }

    /// Validate a bearer token and return the claims it was issued with.
    pub fn authenticate(&self, token: &str) -> Result<TokenClaims, AuthError> {
        self.tokens.validate_token(token)
    }
}

#[cfg(all(test, feature = "auth"))]
mod tests {
    use super::*;
    use crate::auth::{JwtConfig, JwtTokenService};

    fn service() -> MockAuthService {
        MockAuthService::new(Arc::new(JwtTokenService::new(JwtConfig::default())))
    }

    #[test]
    fn test_login_with_mock_credentials() {
        let auth = service();
        let session = auth.login("jinworld13@gmail.com", "123").unwrap();

        assert_eq!(session.user.id, MOCK_USER_ID);
        assert_eq!(session.user.email, MOCK_EMAIL);
        assert!(!session.token.is_empty());
        assert_eq!(User::from(auth.authenticate(&session.token).unwrap()), session.user);
    }

    #[test]
    fn test_login_rejects_anything_else() {
        let auth = service();
        for (email, password) in [
            ("jinworld13@gmail.com", "1234"),
            ("jinworld13@gmail.com", ""),
            ("JINWORLD13@gmail.com", "123"),
            ("someone@example.com", "123"),
        ] {
            assert!(matches!(
                auth.login(email, password),
                Err(AuthError::InvalidCredentials)
            ));
        }
    }

    #[test]
    fn test_authenticate_rejects_garbage() {
        assert!(service().authenticate("mock-token-12345").is_err());
    }
}
