//! Local post store - persists the whole collection into one storage slot.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use board_core::domain::{NewPost, Post, PostPatch, PostQuery};
use board_core::error::RepoError;
use board_core::ports::{KeyValueStorage, PostRepository, StorageError};

use super::query::apply_query;
use crate::storage::POSTS_KEY;

/// Post repository backed by a single key-value slot.
///
/// The slot holds a JSON array of posts in insertion order. Every read loads
/// the array fresh and every mutation rewrites it in full. Missing or corrupt
/// data reads as an empty board, entries that are not valid posts are hidden
/// but preserved, and write failures are returned to the caller.
pub struct LocalPostStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    // Serializes load-modify-save within this process.
    write_lock: Mutex<()>,
}

impl LocalPostStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_key(storage, POSTS_KEY)
    }

    pub fn with_key(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Load every stored record, readable or not, in stored order.
    ///
    /// A slot that is missing or not a JSON array yields no records. Entries
    /// that do not parse as a [`Post`] are kept as raw JSON so a later
    /// rewrite puts them back unchanged. Failing to read the slot at all is
    /// an error, so mutations never overwrite data they could not see.
    fn try_load(&self) -> Result<Vec<StoredRecord>, StorageError> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(Vec::new());
        };

        let records: Vec<StoredRecord> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Stored posts are corrupt, treating as empty");
                return Ok(Vec::new());
            }
        };

        let skipped = records
            .iter()
            .filter(|r| matches!(r, StoredRecord::Unreadable(_)))
            .count();
        if skipped > 0 {
            tracing::warn!(key = %self.key, skipped, "Skipping stored records that are not valid posts");
        }
        Ok(records)
    }

    /// Readable posts; a failed read degrades to an empty board.
    fn load_posts(&self) -> Vec<Post> {
        match self.try_load() {
            Ok(records) => records
                .into_iter()
                .filter_map(StoredRecord::into_post)
                .collect(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read posts, treating as empty");
                Vec::new()
            }
        }
    }

    fn save(&self, records: &[StoredRecord]) -> Result<(), RepoError> {
        let raw =
            serde_json::to_string(records).map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.storage.set(&self.key, &raw)?;
        tracing::debug!(key = %self.key, count = records.len(), "Saved posts");
        Ok(())
    }

    fn fresh_id(records: &[StoredRecord]) -> String {
        loop {
            let id = Post::generate_id();
            if !records.iter().any(|r| r.has_id(&id)) {
                return id;
            }
        }
    }
}

/// One entry of the stored array.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredRecord {
    Post(Post),
    Unreadable(serde_json::Value),
}

impl StoredRecord {
    fn into_post(self) -> Option<Post> {
        match self {
            StoredRecord::Post(post) => Some(post),
            StoredRecord::Unreadable(_) => None,
        }
    }

    fn as_post_mut(&mut self) -> Option<&mut Post> {
        match self {
            StoredRecord::Post(post) => Some(post),
            StoredRecord::Unreadable(_) => None,
        }
    }

    fn has_id(&self, id: &str) -> bool {
        match self {
            StoredRecord::Post(post) => post.id == id,
            StoredRecord::Unreadable(value) => value.get("id").and_then(|v| v.as_str()) == Some(id),
        }
    }
}

#[async_trait]
impl PostRepository for LocalPostStore {
    async fn list(&self, query: &PostQuery) -> Result<Vec<Post>, RepoError> {
        let posts = apply_query(self.load_posts(), query);
        tracing::debug!(count = posts.len(), "Listed posts");
        Ok(posts)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        Ok(self.load_posts().into_iter().find(|p| p.id == id))
    }

    async fn create(&self, data: NewPost, owner_id: &str) -> Result<Post, RepoError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.try_load()?;

        let mut post = Post::new(data, owner_id);
        post.id = Self::fresh_id(&records);

        records.push(StoredRecord::Post(post.clone()));
        self.save(&records)?;

        tracing::info!(post_id = %post.id, user_id = %owner_id, "Post created");
        Ok(post)
    }

    async fn update(&self, id: &str, patch: PostPatch) -> Result<Post, RepoError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.try_load()?;

        let post = records
            .iter_mut()
            .filter_map(StoredRecord::as_post_mut)
            .find(|p| p.id == id)
            .ok_or_else(|| RepoError::NotFound { id: id.to_string() })?;
        post.apply(patch);
        let updated = post.clone();

        self.save(&records)?;

        tracing::info!(post_id = %id, "Post updated");
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.try_load()?;

        let before = records.len();
        records.retain(|r| !matches!(r, StoredRecord::Post(p) if p.id == id));
        if records.len() == before {
            return Err(RepoError::NotFound { id: id.to_string() });
        }

        self.save(&records)?;

        tracing::info!(post_id = %id, "Post deleted");
        Ok(())
    }
}
