//! Driving port for post mutations.
//!
//! Payload fields arrive unvalidated so the service can order its checks:
//! authentication, then lookup, then ownership, then payload validation.

use async_trait::async_trait;

use crate::domain::access::UpdateMode;
use crate::domain::{Actor, Error, GroupId, Post, PostChanges, PostId};

/// Request to publish a post.
#[derive(Debug, Clone)]
pub struct CreatePostRequest {
    /// Caller identity; becomes the author.
    pub actor: Actor,
    /// Body text; required.
    pub text: Option<String>,
    /// Optional image reference.
    pub image: Option<String>,
    /// Optional group, which must exist.
    pub group: Option<GroupId>,
}

/// Request to change a post.
#[derive(Debug, Clone)]
pub struct UpdatePostRequest {
    /// Caller identity; must be the author.
    pub actor: Actor,
    /// Target post.
    pub post_id: PostId,
    /// Whether omitted required fields are an error.
    pub mode: UpdateMode,
    /// Requested changes.
    pub changes: PostChanges,
}

/// Request to delete a post.
#[derive(Debug, Clone)]
pub struct DeletePostRequest {
    /// Caller identity; must be the author.
    pub actor: Actor,
    /// Target post.
    pub post_id: PostId,
}

/// Use-case port for author-owned post mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostsCommand: Send + Sync {
    /// Publish a post authored by the actor.
    async fn create_post(&self, request: CreatePostRequest) -> Result<Post, Error>;

    /// Update a post owned by the actor.
    async fn update_post(&self, request: UpdatePostRequest) -> Result<Post, Error>;

    /// Delete a post owned by the actor.
    async fn delete_post(&self, request: DeletePostRequest) -> Result<(), Error>;
}
