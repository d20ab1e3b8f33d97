//! PostgreSQL-backed `UserRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId, Username};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::UserRow;
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel implementation of [`UserRepository`].
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserRepositoryError {
    map_basic_pool_error(error, UserRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    map_basic_diesel_error(
        error,
        UserRepositoryError::query,
        UserRepositoryError::connection,
    )
}

fn into_user(row: Option<UserRow>) -> Result<Option<User>, UserRepositoryError> {
    row.map(User::try_from)
        .transpose()
        .map_err(|err| UserRepositoryError::query(err.to_string()))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .find(*id.as_uuid())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        into_user(row)
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .filter(users::username.eq(username.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        into_user(row)
    }
}
