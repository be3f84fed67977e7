//! # Board Infrastructure
//!
//! Concrete implementations of the ports defined in `board-core`:
//! key-value storage, the local post store, mock login and the mock API
//! facade that stands in for a remote backend.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - Storage and the post store only
//! - `auth` - JWT bearer tokens via `jsonwebtoken`

pub mod api;
pub mod auth;
pub mod charts;
pub mod posts;
pub mod storage;

// Re-exports
pub use api::{MockApi, SimulatedLatency};
pub use auth::{MockAuthService, SessionStore};
pub use charts::MockChartSource;
pub use posts::LocalPostStore;
pub use storage::{FileStorage, InMemoryStorage};

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService};
