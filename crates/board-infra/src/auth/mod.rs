//! Authentication implementations.

#[cfg(feature = "auth")]
mod jwt;
mod mock;
mod session;

#[cfg(feature = "auth")]
pub use jwt::{JwtConfig, JwtTokenService};
pub use mock::{MOCK_EMAIL, MOCK_PASSWORD, MOCK_USER_ID, MockAuthService};
pub use session::SessionStore;
