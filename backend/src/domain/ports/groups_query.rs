//! Driving port for reading groups.

use async_trait::async_trait;

use crate::domain::{Actor, Error, Group, GroupId};

/// Use-case port for the read-only group surface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupsQuery: Send + Sync {
    /// Every group, ordered by id.
    async fn list_groups(&self, actor: &Actor) -> Result<Vec<Group>, Error>;

    /// One group, or `NotFound`.
    async fn get_group(&self, actor: &Actor, id: GroupId) -> Result<Group, Error>;
}
