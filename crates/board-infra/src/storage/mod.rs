//! Storage implementations - file-backed durable slots and in-memory fallback.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::InMemoryStorage;

/// Slot holding the serialized post collection.
pub const POSTS_KEY: &str = "mock_posts";
/// Slot holding the bearer token of the signed-in user.
pub const TOKEN_KEY: &str = "accessToken";
/// Slot holding the signed-in user record.
pub const USER_KEY: &str = "user";

/// Typical browser local-storage quota.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;
