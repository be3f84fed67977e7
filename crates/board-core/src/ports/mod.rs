//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod chart;
mod repository;
mod storage;

pub use auth::{AuthError, TokenClaims, TokenService};
pub use chart::ChartSource;
pub use repository::PostRepository;
pub use storage::{KeyValueStorage, StorageError};
