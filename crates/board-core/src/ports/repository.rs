use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostPatch, PostQuery};
use crate::error::RepoError;

/// Post repository - the request/response contract shared by the local
/// mock store and any remote backend.
///
/// Callers always receive owned copies; nothing returned aliases the
/// repository's state.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List posts matching `query`.
    async fn list(&self, query: &PostQuery) -> Result<Vec<Post>, RepoError>;

    /// Find a single post by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError>;

    /// Create a post owned by `owner_id`; id and timestamp are assigned here.
    async fn create(&self, data: NewPost, owner_id: &str) -> Result<Post, RepoError>;

    /// Merge `patch` over the stored post.
    async fn update(&self, id: &str, patch: PostPatch) -> Result<Post, RepoError>;

    /// Remove the post for good.
    async fn delete(&self, id: &str) -> Result<(), RepoError>;
}
