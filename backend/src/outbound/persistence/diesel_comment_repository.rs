//! PostgreSQL-backed `CommentRepository`.
//!
//! Every read is scoped by post id, matching the nested URL layout.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{CommentRepository, CommentRepositoryError};
use crate::domain::{Comment, CommentId, NewComment, PostId};

use super::diesel_basic_error_mapping::{
    is_foreign_key_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{CommentRow, NewCommentRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{comments, users};

const AUTHOR_CONSTRAINT: &str = "comments_author_id_fkey";

/// Diesel implementation of [`CommentRepository`].
#[derive(Clone)]
pub struct DieselCommentRepository {
    pool: DbPool,
}

impl DieselCommentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CommentRepositoryError {
    map_basic_pool_error(error, CommentRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> CommentRepositoryError {
    map_basic_diesel_error(
        error,
        CommentRepositoryError::query,
        CommentRepositoryError::connection,
    )
}

fn map_insert_error(error: diesel::result::Error) -> CommentRepositoryError {
    if is_foreign_key_violation(&error, AUTHOR_CONSTRAINT) {
        CommentRepositoryError::unknown_author()
    } else {
        map_diesel_error(error)
    }
}

fn into_comment(row: (CommentRow, UserRow)) -> Result<Comment, CommentRepositoryError> {
    Comment::try_from(row).map_err(|err| CommentRepositoryError::query(err.to_string()))
}

async fn load_comment(
    conn: &mut AsyncPgConnection,
    id: CommentId,
) -> Result<Option<Comment>, CommentRepositoryError> {
    let row: Option<(CommentRow, UserRow)> = comments::table
        .inner_join(users::table)
        .filter(comments::id.eq(id.get()))
        .select((CommentRow::as_select(), UserRow::as_select()))
        .first(conn)
        .await
        .optional()
        .map_err(map_diesel_error)?;
    row.map(into_comment).transpose()
}

#[async_trait]
impl CommentRepository for DieselCommentRepository {
    async fn list_for_post(&self, post: PostId) -> Result<Vec<Comment>, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<(CommentRow, UserRow)> = comments::table
            .inner_join(users::table)
            .filter(comments::post_id.eq(post.get()))
            .select((CommentRow::as_select(), UserRow::as_select()))
            .order((comments::created.asc(), comments::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(into_comment).collect()
    }

    async fn find_for_post(
        &self,
        post: PostId,
        id: CommentId,
    ) -> Result<Option<Comment>, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<(CommentRow, UserRow)> = comments::table
            .inner_join(users::table)
            .filter(comments::id.eq(id.get()))
            .filter(comments::post_id.eq(post.get()))
            .select((CommentRow::as_select(), UserRow::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(into_comment).transpose()
    }

    async fn create(&self, comment: &NewComment) -> Result<Comment, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewCommentRow {
            post_id: comment.post.get(),
            author_id: *comment.author.as_uuid(),
            text: &comment.text,
        };
        let id: i64 = diesel::insert_into(comments::table)
            .values(&row)
            .returning(comments::id)
            .get_result(&mut conn)
            .await
            .map_err(map_insert_error)?;
        load_comment(&mut conn, CommentId::new(id))
            .await?
            .ok_or_else(|| CommentRepositoryError::query("inserted comment vanished"))
    }

    async fn update_text(
        &self,
        id: CommentId,
        text: &str,
    ) -> Result<Option<Comment>, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let updated = diesel::update(comments::table.find(id.get()))
            .set(comments::text.eq(text))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if updated == 0 {
            return Ok(None);
        }
        load_comment(&mut conn, id).await
    }

    async fn delete(&self, id: CommentId) -> Result<bool, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(comments::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
