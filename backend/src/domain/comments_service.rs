//! Comment domain service.
//!
//! Comments only exist under a post. Every operation first resolves the post
//! named in the request path with [`CommentsService::resolve_parent`]; a
//! missing post ends the request with `NotFound` before any comment is read
//! or written. The resolved post id is the only source of a new comment's
//! `post`, and comment lookups are scoped to it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::access::{Action, ResourceKind, UpdateMode, authorize, authorize_request};
use crate::domain::ports::{
    CommentRepository, CommentRepositoryError, CommentsCommand, CommentsQuery,
    CreateCommentRequest, DeleteCommentRequest, PostRepository, UpdateCommentRequest,
};
use crate::domain::posts_service::map_post_error;
use crate::domain::validation::{optional_text, required_text};
use crate::domain::{Actor, Comment, CommentId, Error, NewComment, Post, PostId};

fn map_comment_error(error: CommentRepositoryError) -> Error {
    match error {
        CommentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("comment repository unavailable: {message}"))
        }
        CommentRepositoryError::Query { message } => {
            Error::internal(format!("comment repository error: {message}"))
        }
        CommentRepositoryError::UnknownAuthor => {
            Error::unauthorized("session user no longer exists")
        }
    }
}

/// Comment service implementing [`CommentsQuery`] and [`CommentsCommand`].
#[derive(Clone)]
pub struct CommentsService<P, C> {
    posts: Arc<P>,
    comments: Arc<C>,
}

impl<P, C> CommentsService<P, C> {
    /// Create a new service over the post and comment repositories.
    pub fn new(posts: Arc<P>, comments: Arc<C>) -> Self {
        Self { posts, comments }
    }
}

impl<P, C> CommentsService<P, C>
where
    P: PostRepository,
    C: CommentRepository,
{
    /// Resolve the parent post named in the request path.
    ///
    /// # Errors
    /// `NotFound` ("post not found") when no such post exists.
    pub async fn resolve_parent(&self, post_id: PostId) -> Result<Post, Error> {
        self.posts
            .find_by_id(post_id)
            .await
            .map_err(map_post_error)?
            .ok_or_else(|| {
                debug!(%post_id, "parent post not found");
                Error::not_found("post not found")
            })
    }

    async fn load(&self, post: &Post, comment_id: CommentId) -> Result<Comment, Error> {
        self.comments
            .find_for_post(post.id, comment_id)
            .await
            .map_err(map_comment_error)?
            .ok_or_else(|| Error::not_found("comment not found"))
    }

    /// Gate, resolve the parent, load the comment and check ownership.
    async fn load_authorized(
        &self,
        actor: &Actor,
        post_id: PostId,
        comment_id: CommentId,
        action: Action,
    ) -> Result<Comment, Error> {
        authorize_request(ResourceKind::Comment, action, actor)?;
        let post = self.resolve_parent(post_id).await?;
        let comment = self.load(&post, comment_id).await?;
        authorize(ResourceKind::Comment, action, &comment, actor)?;
        Ok(comment)
    }
}

#[async_trait]
impl<P, C> CommentsQuery for CommentsService<P, C>
where
    P: PostRepository,
    C: CommentRepository,
{
    async fn list_comments(&self, actor: &Actor, post_id: PostId) -> Result<Vec<Comment>, Error> {
        authorize_request(ResourceKind::Comment, Action::List, actor)?;
        let post = self.resolve_parent(post_id).await?;
        self.comments
            .list_for_post(post.id)
            .await
            .map_err(map_comment_error)
    }

    async fn get_comment(
        &self,
        actor: &Actor,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<Comment, Error> {
        self.load_authorized(actor, post_id, comment_id, Action::Retrieve)
            .await
    }
}

#[async_trait]
impl<P, C> CommentsCommand for CommentsService<P, C>
where
    P: PostRepository,
    C: CommentRepository,
{
    async fn create_comment(&self, request: CreateCommentRequest) -> Result<Comment, Error> {
        let CreateCommentRequest {
            actor,
            post_id,
            text,
        } = request;
        authorize_request(ResourceKind::Comment, Action::Create, &actor)?;
        let author = actor.require_authenticated()?.clone();
        let post = self.resolve_parent(post_id).await?;
        let text = required_text("text", text)?;

        let comment = self
            .comments
            .create(&NewComment {
                post: post.id,
                author,
                text,
            })
            .await
            .map_err(map_comment_error)?;
        info!(comment_id = %comment.id, post_id = %comment.post, "comment created");
        Ok(comment)
    }

    async fn update_comment(&self, request: UpdateCommentRequest) -> Result<Comment, Error> {
        let UpdateCommentRequest {
            actor,
            post_id,
            comment_id,
            mode,
            text,
        } = request;
        let comment = self
            .load_authorized(&actor, post_id, comment_id, mode.action())
            .await?;

        let text = match mode {
            UpdateMode::Full => required_text("text", text)?,
            UpdateMode::Partial => match optional_text("text", text)? {
                Some(text) => text,
                None => return Ok(comment),
            },
        };

        let updated = self
            .comments
            .update_text(comment_id, &text)
            .await
            .map_err(map_comment_error)?
            .ok_or_else(|| Error::not_found("comment not found"))?;
        info!(%comment_id, %post_id, ?mode, "comment updated");
        Ok(updated)
    }

    async fn delete_comment(&self, request: DeleteCommentRequest) -> Result<(), Error> {
        let DeleteCommentRequest {
            actor,
            post_id,
            comment_id,
        } = request;
        self.load_authorized(&actor, post_id, comment_id, Action::Delete)
            .await?;

        let deleted = self
            .comments
            .delete(comment_id)
            .await
            .map_err(map_comment_error)?;
        if !deleted {
            return Err(Error::not_found("comment not found"));
        }
        info!(%comment_id, %post_id, "comment deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "comments_service_tests.rs"]
mod tests;
