//! PostgreSQL-backed `GroupRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{GroupRepository, GroupRepositoryError};
use crate::domain::{Group, GroupId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::GroupRow;
use super::pool::{DbPool, PoolError};
use super::schema::groups;

/// Diesel implementation of [`GroupRepository`].
#[derive(Clone)]
pub struct DieselGroupRepository {
    pool: DbPool,
}

impl DieselGroupRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> GroupRepositoryError {
    map_basic_pool_error(error, GroupRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> GroupRepositoryError {
    map_basic_diesel_error(
        error,
        GroupRepositoryError::query,
        GroupRepositoryError::connection,
    )
}

fn into_group(row: GroupRow) -> Result<Group, GroupRepositoryError> {
    Group::try_from(row).map_err(|err| GroupRepositoryError::query(err.to_string()))
}

#[async_trait]
impl GroupRepository for DieselGroupRepository {
    async fn list(&self) -> Result<Vec<Group>, GroupRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<GroupRow> = groups::table
            .order(groups::id.asc())
            .select(GroupRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(into_group).collect()
    }

    async fn find_by_id(&self, id: GroupId) -> Result<Option<Group>, GroupRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<GroupRow> = groups::table
            .find(id.get())
            .select(GroupRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(into_group).transpose()
    }
}
