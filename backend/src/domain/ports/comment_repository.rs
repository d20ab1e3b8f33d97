//! Driven port for comment persistence.
use async_trait::async_trait;

use crate::domain::{Comment, CommentId, NewComment, PostId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by comment repository adapters.
    pub enum CommentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "comment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "comment repository query failed: {message}",
        /// The author no longer exists in the user store.
        UnknownAuthor => "comment author does not exist",
    }
}

/// Storage for comments. Every lookup is scoped to a parent post.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments of `post`, oldest first.
    async fn list_for_post(&self, post: PostId) -> Result<Vec<Comment>, CommentRepositoryError>;

    /// Fetch a comment only if it belongs to `post`.
    async fn find_for_post(
        &self,
        post: PostId,
        id: CommentId,
    ) -> Result<Option<Comment>, CommentRepositoryError>;

    /// Insert a comment and return it as stored.
    async fn create(&self, comment: &NewComment) -> Result<Comment, CommentRepositoryError>;

    /// Replace the text; `None` when the comment no longer exists.
    async fn update_text(
        &self,
        id: CommentId,
        text: &str,
    ) -> Result<Option<Comment>, CommentRepositoryError>;

    /// Remove a comment; `false` when nothing was deleted.
    async fn delete(&self, id: CommentId) -> Result<bool, CommentRepositoryError>;
}
