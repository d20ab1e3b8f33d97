//! Driven port for follow edges.
use async_trait::async_trait;

use crate::domain::{Follow, UserId, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by follow repository adapters.
    pub enum FollowRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "follow repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "follow repository query failed: {message}",
        /// The store's uniqueness constraint rejected the edge.
        Duplicate => "follow edge already exists",
    }
}

/// Storage for follow edges.
///
/// Adapters must enforce uniqueness of `(follower, following)` atomically and
/// report a violation as [`FollowRepositoryError::Duplicate`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Outgoing edges of `follower`, optionally restricted to one followed
    /// username.
    async fn list_for_follower(
        &self,
        follower: &UserId,
        following: Option<Username>,
    ) -> Result<Vec<Follow>, FollowRepositoryError>;

    /// Whether the edge already exists.
    async fn exists(
        &self,
        follower: &UserId,
        following: &UserId,
    ) -> Result<bool, FollowRepositoryError>;

    /// Insert an edge.
    async fn create(
        &self,
        follower: &UserId,
        following: &UserId,
    ) -> Result<(), FollowRepositoryError>;
}
