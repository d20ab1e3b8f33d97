//! PostgreSQL-backed `PostRepository`.
//!
//! Posts are always read joined with their author so the rendered username
//! comes from the same query. Listing order is `pub_date`, then `id`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use pagination::PageRequest;

use crate::domain::ports::{PostRepository, PostRepositoryError};
use crate::domain::{NewPost, Post, PostChanges, PostId};

use super::diesel_basic_error_mapping::{
    is_foreign_key_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewPostRow, PostChangeset, PostRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{posts, users};

const AUTHOR_CONSTRAINT: &str = "posts_author_id_fkey";

/// Diesel implementation of [`PostRepository`].
#[derive(Clone)]
pub struct DieselPostRepository {
    pool: DbPool,
}

impl DieselPostRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PostRepositoryError {
    map_basic_pool_error(error, PostRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> PostRepositoryError {
    map_basic_diesel_error(
        error,
        PostRepositoryError::query,
        PostRepositoryError::connection,
    )
}

fn map_insert_error(error: diesel::result::Error) -> PostRepositoryError {
    if is_foreign_key_violation(&error, AUTHOR_CONSTRAINT) {
        PostRepositoryError::unknown_author()
    } else {
        map_diesel_error(error)
    }
}

fn into_post(row: (PostRow, UserRow)) -> Result<Post, PostRepositoryError> {
    Post::try_from(row).map_err(|err| PostRepositoryError::query(err.to_string()))
}

fn to_sql_count(value: usize) -> Result<i64, PostRepositoryError> {
    i64::try_from(value).map_err(|_| PostRepositoryError::query("page window out of range"))
}

async fn load_post(
    conn: &mut AsyncPgConnection,
    id: PostId,
) -> Result<Option<Post>, PostRepositoryError> {
    let row: Option<(PostRow, UserRow)> = posts::table
        .inner_join(users::table)
        .filter(posts::id.eq(id.get()))
        .select((PostRow::as_select(), UserRow::as_select()))
        .first(conn)
        .await
        .optional()
        .map_err(map_diesel_error)?;
    row.map(into_post).transpose()
}

#[async_trait]
impl PostRepository for DieselPostRepository {
    async fn count(&self) -> Result<usize, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let total: i64 = posts::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        usize::try_from(total).map_err(|_| PostRepositoryError::query("negative post count"))
    }

    async fn list(&self, window: Option<PageRequest>) -> Result<Vec<Post>, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let mut query = posts::table
            .inner_join(users::table)
            .select((PostRow::as_select(), UserRow::as_select()))
            .order((posts::pub_date.asc(), posts::id.asc()))
            .into_boxed();
        if let Some(window) = window {
            query = query
                .limit(to_sql_count(window.limit())?)
                .offset(to_sql_count(window.offset())?);
        }
        let rows: Vec<(PostRow, UserRow)> =
            query.load(&mut conn).await.map_err(map_diesel_error)?;
        rows.into_iter().map(into_post).collect()
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        load_post(&mut conn, id).await
    }

    async fn create(&self, post: &NewPost) -> Result<Post, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewPostRow {
            text: &post.text,
            author_id: *post.author.as_uuid(),
            image: post.image.as_deref(),
            group_id: post.group.map(|group| group.get()),
        };
        let id: i64 = diesel::insert_into(posts::table)
            .values(&row)
            .returning(posts::id)
            .get_result(&mut conn)
            .await
            .map_err(map_insert_error)?;
        load_post(&mut conn, PostId::new(id))
            .await?
            .ok_or_else(|| PostRepositoryError::query("inserted post vanished"))
    }

    async fn update(
        &self,
        id: PostId,
        changes: &PostChanges,
    ) -> Result<Option<Post>, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changeset = PostChangeset::from_changes(changes);
        if !changeset.is_empty() {
            let updated = diesel::update(posts::table.find(id.get()))
                .set(&changeset)
                .execute(&mut conn)
                .await
                .map_err(map_diesel_error)?;
            if updated == 0 {
                return Ok(None);
            }
        }
        load_post(&mut conn, id).await
    }

    async fn delete(&self, id: PostId) -> Result<bool, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(posts::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
