//! Post domain service.
//!
//! Implements the public read surface and the author-owned mutations. Every
//! operation runs the ownership guard in two steps around the lookup.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::Page;
use tracing::info;

use crate::domain::access::{Action, ResourceKind, UpdateMode, authorize, authorize_request};
use crate::domain::ports::{
    CreatePostRequest, DeletePostRequest, GroupRepository, GroupRepositoryError,
    ListPostsRequest, PostRepository, PostRepositoryError, PostsCommand, PostsQuery,
    UpdatePostRequest,
};
use crate::domain::validation::{optional_text, required_text, unknown_reference_error};
use crate::domain::{Actor, Error, GroupId, NewPost, Post, PostChanges, PostId};

/// Detail code reported when a post references a missing group.
pub const GROUP_NOT_FOUND_CODE: &str = "group_not_found";

pub(crate) fn map_post_error(error: PostRepositoryError) -> Error {
    match error {
        PostRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("post repository unavailable: {message}"))
        }
        PostRepositoryError::Query { message } => {
            Error::internal(format!("post repository error: {message}"))
        }
        PostRepositoryError::UnknownAuthor => Error::unauthorized("session user no longer exists"),
    }
}

fn map_group_error(error: GroupRepositoryError) -> Error {
    match error {
        GroupRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("group repository unavailable: {message}"))
        }
        GroupRepositoryError::Query { message } => {
            Error::internal(format!("group repository error: {message}"))
        }
    }
}

/// Post service implementing [`PostsQuery`] and [`PostsCommand`].
#[derive(Clone)]
pub struct PostsService<P, G> {
    posts: Arc<P>,
    groups: Arc<G>,
}

impl<P, G> PostsService<P, G> {
    /// Create a new service over the post and group repositories.
    pub fn new(posts: Arc<P>, groups: Arc<G>) -> Self {
        Self { posts, groups }
    }
}

impl<P, G> PostsService<P, G>
where
    P: PostRepository,
    G: GroupRepository,
{
    async fn load(&self, id: PostId) -> Result<Post, Error> {
        self.posts
            .find_by_id(id)
            .await
            .map_err(map_post_error)?
            .ok_or_else(|| Error::not_found("post not found"))
    }

    async fn ensure_group_exists(&self, group: Option<GroupId>) -> Result<(), Error> {
        let Some(id) = group else {
            return Ok(());
        };
        let found = self.groups.find_by_id(id).await.map_err(map_group_error)?;
        match found {
            Some(_) => Ok(()),
            None => Err(unknown_reference_error("group", GROUP_NOT_FOUND_CODE, id)),
        }
    }

    /// Load `id` and run the full guard for `action`.
    async fn load_authorized(
        &self,
        id: PostId,
        action: Action,
        actor: &Actor,
    ) -> Result<Post, Error> {
        authorize_request(ResourceKind::Post, action, actor)?;
        let post = self.load(id).await?;
        authorize(ResourceKind::Post, action, &post, actor)?;
        Ok(post)
    }
}

#[async_trait]
impl<P, G> PostsQuery for PostsService<P, G>
where
    P: PostRepository,
    G: GroupRepository,
{
    async fn list_posts(&self, request: ListPostsRequest) -> Result<Page<Post>, Error> {
        authorize_request(ResourceKind::Post, Action::List, &request.actor)?;
        match request.window {
            Some(window) => {
                let count = self.posts.count().await.map_err(map_post_error)?;
                let items = if window.offset() >= count {
                    Vec::new()
                } else {
                    self.posts.list(Some(window)).await.map_err(map_post_error)?
                };
                Ok(Page::new(items, count))
            }
            None => {
                let items = self.posts.list(None).await.map_err(map_post_error)?;
                let count = items.len();
                Ok(Page::new(items, count))
            }
        }
    }

    async fn get_post(&self, actor: &Actor, id: PostId) -> Result<Post, Error> {
        self.load_authorized(id, Action::Retrieve, actor).await
    }
}

#[async_trait]
impl<P, G> PostsCommand for PostsService<P, G>
where
    P: PostRepository,
    G: GroupRepository,
{
    async fn create_post(&self, request: CreatePostRequest) -> Result<Post, Error> {
        let CreatePostRequest {
            actor,
            text,
            image,
            group,
        } = request;
        authorize_request(ResourceKind::Post, Action::Create, &actor)?;
        let author = actor.require_authenticated()?.clone();
        let text = required_text("text", text)?;
        self.ensure_group_exists(group).await?;

        let post = self
            .posts
            .create(&NewPost {
                author,
                text,
                image,
                group,
            })
            .await
            .map_err(map_post_error)?;
        info!(post_id = %post.id, author = %post.author.username(), "post created");
        Ok(post)
    }

    async fn update_post(&self, request: UpdatePostRequest) -> Result<Post, Error> {
        let UpdatePostRequest {
            actor,
            post_id,
            mode,
            changes,
        } = request;
        self.load_authorized(post_id, mode.action(), &actor).await?;

        let text = match mode {
            UpdateMode::Full => Some(required_text("text", changes.text)?),
            UpdateMode::Partial => optional_text("text", changes.text)?,
        };
        if let Some(group) = changes.group {
            self.ensure_group_exists(group).await?;
        }
        let changes = PostChanges {
            text,
            image: changes.image,
            group: changes.group,
        };

        let updated = self
            .posts
            .update(post_id, &changes)
            .await
            .map_err(map_post_error)?
            .ok_or_else(|| Error::not_found("post not found"))?;
        info!(post_id = %updated.id, ?mode, "post updated");
        Ok(updated)
    }

    async fn delete_post(&self, request: DeletePostRequest) -> Result<(), Error> {
        let DeletePostRequest { actor, post_id } = request;
        self.load_authorized(post_id, Action::Delete, &actor).await?;

        let deleted = self.posts.delete(post_id).await.map_err(map_post_error)?;
        if !deleted {
            return Err(Error::not_found("post not found"));
        }
        info!(%post_id, "post deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "posts_service_tests.rs"]
mod tests;
