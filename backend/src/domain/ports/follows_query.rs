//! Driving port for listing the actor's follow edges.

use async_trait::async_trait;

use crate::domain::{Actor, Error, Follow};

/// Use-case port for follow listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowsQuery: Send + Sync {
    /// Outgoing edges of the actor, optionally filtered to one followed
    /// username (exact match). Requires authentication.
    async fn list_follows(&self, actor: &Actor, search: Option<String>)
    -> Result<Vec<Follow>, Error>;
}
