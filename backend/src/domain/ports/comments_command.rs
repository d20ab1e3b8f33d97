//! Driving port for comment mutations.

use async_trait::async_trait;

use crate::domain::access::UpdateMode;
use crate::domain::{Actor, Comment, CommentId, Error, PostId};

/// Request to comment on a post.
#[derive(Debug, Clone)]
pub struct CreateCommentRequest {
    /// Caller identity; becomes the author.
    pub actor: Actor,
    /// Parent post taken from the request path.
    pub post_id: PostId,
    /// Body text; required.
    pub text: Option<String>,
}

/// Request to change a comment.
#[derive(Debug, Clone)]
pub struct UpdateCommentRequest {
    /// Caller identity; must be the author.
    pub actor: Actor,
    /// Parent post taken from the request path.
    pub post_id: PostId,
    /// Target comment.
    pub comment_id: CommentId,
    /// Whether `text` is required.
    pub mode: UpdateMode,
    /// Replacement text.
    pub text: Option<String>,
}

/// Request to delete a comment.
#[derive(Debug, Clone)]
pub struct DeleteCommentRequest {
    /// Caller identity; must be the author.
    pub actor: Actor,
    /// Parent post taken from the request path.
    pub post_id: PostId,
    /// Target comment.
    pub comment_id: CommentId,
}

/// Use-case port for author-owned comment mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentsCommand: Send + Sync {
    /// Comment on a post as the actor.
    async fn create_comment(&self, request: CreateCommentRequest) -> Result<Comment, Error>;

    /// Update a comment owned by the actor.
    async fn update_comment(&self, request: UpdateCommentRequest) -> Result<Comment, Error>;

    /// Delete a comment owned by the actor.
    async fn delete_comment(&self, request: DeleteCommentRequest) -> Result<(), Error>;
}
