//! Session slots - bearer token and current user record.

use std::sync::Arc;

use board_core::domain::{Session, User};
use board_core::ports::{KeyValueStorage, StorageError};

use crate::storage::{TOKEN_KEY, USER_KEY};

/// Reads and writes the signed-in session in its two storage slots.
///
/// The token is stored as a raw string and the user as a JSON object. Both
/// slots are owned by the session; the post store never writes them.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Store both slots. If the token cannot be written the user record is
    /// removed again, so a half-written session never reads as signed in.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let user = serde_json::to_string(&session.user)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.storage.set(USER_KEY, &user)?;
        if let Err(e) = self.storage.set(TOKEN_KEY, &session.token) {
            if let Err(cleanup) = self.storage.remove(USER_KEY) {
                tracing::warn!(error = %cleanup, "Failed to roll back user record");
            }
            return Err(e);
        }
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// The stored user record; `None` if absent or unreadable.
    pub fn current_user(&self) -> Option<User> {
        let raw = self.read(USER_KEY)?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) if !user.id.is_empty() => Some(user),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Stored user record is corrupt");
                None
            }
        }
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(USER_KEY)?;
        Ok(())
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to read session slot");
                None
            }
        }
    }
}
