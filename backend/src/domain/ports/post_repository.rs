//! Driven port for post persistence.
use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{NewPost, Post, PostChanges, PostId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by post repository adapters.
    pub enum PostRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "post repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "post repository query failed: {message}",
        /// The author no longer exists in the user store.
        UnknownAuthor => "post author does not exist",
    }
}

/// Storage for posts.
///
/// Lists are ordered by publication date, then id, so windows are stable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Total number of posts.
    async fn count(&self) -> Result<usize, PostRepositoryError>;

    /// Posts inside `window`, or every post when `window` is `None`.
    async fn list(&self, window: Option<PageRequest>) -> Result<Vec<Post>, PostRepositoryError>;

    /// Fetch one post.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostRepositoryError>;

    /// Insert a post and return it as stored.
    async fn create(&self, post: &NewPost) -> Result<Post, PostRepositoryError>;

    /// Apply `changes`; `None` when the post no longer exists.
    async fn update(
        &self,
        id: PostId,
        changes: &PostChanges,
    ) -> Result<Option<Post>, PostRepositoryError>;

    /// Remove a post and its comments; `false` when nothing was deleted.
    async fn delete(&self, id: PostId) -> Result<bool, PostRepositoryError>;
}
