//! Durable key-value slot - the local-storage abstraction posts and the
//! session are persisted through.

/// Whole-value string storage keyed by name.
///
/// Every `set` replaces the stored value wholesale. Implementations must
/// report write failures instead of dropping the value.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage operation errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Quota exceeded writing {key}: {size} bytes over a {quota} byte quota")]
    QuotaExceeded {
        key: String,
        size: usize,
        quota: usize,
    },

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("I/O failed: {0}")]
    Io(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}
