//! Group read service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::access::{Action, ResourceKind, authorize_request};
use crate::domain::ports::{GroupRepository, GroupRepositoryError, GroupsQuery};
use crate::domain::{Actor, Error, Group, GroupId};

fn map_repository_error(error: GroupRepositoryError) -> Error {
    match error {
        GroupRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("group repository unavailable: {message}"))
        }
        GroupRepositoryError::Query { message } => {
            Error::internal(format!("group repository error: {message}"))
        }
    }
}

/// Group service implementing [`GroupsQuery`].
#[derive(Clone)]
pub struct GroupsService<R> {
    groups: Arc<R>,
}

impl<R> GroupsService<R> {
    /// Create a new service over the group repository.
    pub fn new(groups: Arc<R>) -> Self {
        Self { groups }
    }
}

#[async_trait]
impl<R> GroupsQuery for GroupsService<R>
where
    R: GroupRepository,
{
    async fn list_groups(&self, actor: &Actor) -> Result<Vec<Group>, Error> {
        authorize_request(ResourceKind::Group, Action::List, actor)?;
        self.groups.list().await.map_err(map_repository_error)
    }

    async fn get_group(&self, actor: &Actor, id: GroupId) -> Result<Group, Error> {
        authorize_request(ResourceKind::Group, Action::Retrieve, actor)?;
        self.groups
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("group not found"))
    }
}
