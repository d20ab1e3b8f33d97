//! Driving port for reading comments under a post.

use async_trait::async_trait;

use crate::domain::{Actor, Comment, CommentId, Error, PostId};

/// Use-case port for public comment reads.
///
/// Both operations resolve the parent post first and fail with `NotFound`
/// when it does not exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentsQuery: Send + Sync {
    /// Comments of `post_id`, oldest first.
    async fn list_comments(&self, actor: &Actor, post_id: PostId) -> Result<Vec<Comment>, Error>;

    /// One comment of `post_id`.
    async fn get_comment(
        &self,
        actor: &Actor,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<Comment, Error>;
}
