//! PostgreSQL-backed `FollowRepository`.
//!
//! Uniqueness of `(user_id, following_id)` is enforced by the
//! `follows_user_following_key` constraint; a violation surfaces as
//! [`FollowRepositoryError::Duplicate`] so concurrent creates cannot both win.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{FollowRepository, FollowRepositoryError};
use crate::domain::{Follow, User, UserId, Username};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewFollowRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{follows, users};

const UNIQUE_EDGE_CONSTRAINT: &str = "follows_user_following_key";

/// Diesel implementation of [`FollowRepository`].
#[derive(Clone)]
pub struct DieselFollowRepository {
    pool: DbPool,
}

impl DieselFollowRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> FollowRepositoryError {
    map_basic_pool_error(error, FollowRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> FollowRepositoryError {
    map_basic_diesel_error(
        error,
        FollowRepositoryError::query,
        FollowRepositoryError::connection,
    )
}

fn map_insert_error(error: diesel::result::Error) -> FollowRepositoryError {
    if is_unique_violation(&error, UNIQUE_EDGE_CONSTRAINT) {
        FollowRepositoryError::duplicate()
    } else {
        map_diesel_error(error)
    }
}

fn into_user(row: UserRow) -> Result<User, FollowRepositoryError> {
    User::try_from(row).map_err(|err| FollowRepositoryError::query(err.to_string()))
}

fn pair_with_follower(follower: &User, rows: Vec<UserRow>) -> Result<Vec<Follow>, FollowRepositoryError> {
    rows.into_iter()
        .map(|row| {
            Ok(Follow {
                user: follower.clone(),
                following: into_user(row)?,
            })
        })
        .collect()
}

#[async_trait]
impl FollowRepository for DieselFollowRepository {
    async fn list_for_follower(
        &self,
        follower: &UserId,
        following: Option<Username>,
    ) -> Result<Vec<Follow>, FollowRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let follower_row: Option<UserRow> = users::table
            .find(*follower.as_uuid())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        let Some(follower_row) = follower_row else {
            return Ok(Vec::new());
        };
        let follower = into_user(follower_row)?;

        let mut query = follows::table
            .inner_join(users::table)
            .filter(follows::user_id.eq(*follower.id().as_uuid()))
            .select(UserRow::as_select())
            .order(follows::id.asc())
            .into_boxed();
        if let Some(username) = following {
            query = query.filter(users::username.eq(username.as_ref().to_owned()));
        }
        let rows: Vec<UserRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        pair_with_follower(&follower, rows)
    }

    async fn exists(
        &self,
        follower: &UserId,
        following: &UserId,
    ) -> Result<bool, FollowRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(
            follows::table
                .filter(follows::user_id.eq(*follower.as_uuid()))
                .filter(follows::following_id.eq(*following.as_uuid())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn create(
        &self,
        follower: &UserId,
        following: &UserId,
    ) -> Result<(), FollowRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewFollowRow {
            user_id: *follower.as_uuid(),
            following_id: *following.as_uuid(),
        };
        diesel::insert_into(follows::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_insert_error)?;
        Ok(())
    }
}
