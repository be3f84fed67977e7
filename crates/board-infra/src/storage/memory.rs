//! In-memory storage - used by tests and when no data directory is configured.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use board_core::ports::{KeyValueStorage, StorageError};

/// In-memory key-value slots using a `HashMap` behind a `RwLock`.
///
/// An optional quota caps the total bytes of all stored values, the way a
/// browser caps local storage per origin.
/// Note: Data is lost on process restart.
pub struct InMemoryStorage {
    slots: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
            quota: None,
        }
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
            quota: Some(quota),
        }
    }

    /// Total bytes currently stored.
    pub fn used_bytes(&self) -> usize {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.values().map(String::len).sum()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(quota) = self.quota {
            let others: usize = slots
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let size = others + value.len();
            if size > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    size,
                    quota,
                });
            }
        }

        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.remove(key);
        Ok(())
    }
}
