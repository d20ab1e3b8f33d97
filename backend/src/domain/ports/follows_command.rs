//! Driving port for creating follow edges.

use async_trait::async_trait;

use crate::domain::{Actor, Error, Follow};

/// Request to follow a user.
#[derive(Debug, Clone)]
pub struct CreateFollowRequest {
    /// Caller identity; becomes the follower.
    pub actor: Actor,
    /// Username of the user to follow; required.
    pub following: Option<String>,
}

/// Use-case port for follow creation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowsCommand: Send + Sync {
    /// Validate and persist a new edge from the actor.
    async fn create_follow(&self, request: CreateFollowRequest) -> Result<Follow, Error>;
}
