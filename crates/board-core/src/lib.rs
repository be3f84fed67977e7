//! # Board Core
//!
//! The domain layer of the post board.
//! Posts, queries, the error taxonomy and the ports adapters implement.
//! Nothing in here touches storage or the clock beyond id/timestamp generation.

pub mod cancel;
pub mod domain;
pub mod error;
pub mod ports;

pub use cancel::{AbortController, AbortSignal, AbortSlot};
pub use error::{DomainError, RepoError};
