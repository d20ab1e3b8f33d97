//! Internal Diesel row structs and their conversion into domain types.
//!
//! Rows never leave the persistence module. Stored values are re-validated on
//! the way out; a row that fails validation is reported as [`InvalidRow`].

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    Comment, CommentId, Group, GroupId, Post, PostChanges, PostId, Slug, User, UserId, Username,
};

use super::schema::{comments, follows, groups, posts, users};

/// A stored value that no longer satisfies domain validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stored {entity}: {reason}")]
pub(crate) struct InvalidRow {
    entity: &'static str,
    reason: String,
}

impl InvalidRow {
    fn new(entity: &'static str, reason: impl ToString) -> Self {
        Self {
            entity,
            reason: reason.to_string(),
        }
    }
}

/// Public projection of a user; the password hash is never selected here.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
}

impl TryFrom<UserRow> for User {
    type Error = InvalidRow;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let username = Username::new(row.username).map_err(|err| InvalidRow::new("user", err))?;
        Ok(User::new(UserId::from_uuid(row.id), username))
    }
}

/// Credential projection used only by the login adapter.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CredentialRow {
    pub id: Uuid,
    pub password_hash: String,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = groups)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct GroupRow {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
}

impl TryFrom<GroupRow> for Group {
    type Error = InvalidRow;

    fn try_from(row: GroupRow) -> Result<Self, Self::Error> {
        Ok(Group {
            id: GroupId::new(row.id),
            title: row.title,
            slug: Slug::new(row.slug).map_err(|err| InvalidRow::new("group", err))?,
            description: row.description,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PostRow {
    pub id: i64,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub author_id: Uuid,
    pub image: Option<String>,
    pub group_id: Option<i64>,
}

impl TryFrom<(PostRow, UserRow)> for Post {
    type Error = InvalidRow;

    fn try_from((row, author): (PostRow, UserRow)) -> Result<Self, Self::Error> {
        if row.author_id != author.id {
            return Err(InvalidRow::new("post", "author join mismatch"));
        }
        Ok(Post {
            id: PostId::new(row.id),
            text: row.text,
            pub_date: row.pub_date,
            author: author.try_into()?,
            image: row.image,
            group: row.group_id.map(GroupId::new),
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = posts)]
pub(crate) struct NewPostRow<'a> {
    pub text: &'a str,
    pub author_id: Uuid,
    pub image: Option<&'a str>,
    pub group_id: Option<i64>,
}

/// Partial post update. `None` skips a column; `Some(None)` writes NULL.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = posts)]
pub(crate) struct PostChangeset<'a> {
    pub text: Option<&'a str>,
    pub image: Option<Option<&'a str>>,
    pub group_id: Option<Option<i64>>,
}

impl<'a> PostChangeset<'a> {
    pub(crate) fn from_changes(changes: &'a PostChanges) -> Self {
        Self {
            text: changes.text.as_deref(),
            image: changes.image.as_ref().map(Option::as_deref),
            group_id: changes
                .group
                .map(|group| group.map(GroupId::get)),
        }
    }

    /// True when no column would be written.
    pub(crate) fn is_empty(&self) -> bool {
        self.text.is_none() && self.image.is_none() && self.group_id.is_none()
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CommentRow {
    pub id: i64,
    pub post_id: i64,
    pub author_id: Uuid,
    pub text: String,
    pub created: DateTime<Utc>,
}

impl TryFrom<(CommentRow, UserRow)> for Comment {
    type Error = InvalidRow;

    fn try_from((row, author): (CommentRow, UserRow)) -> Result<Self, Self::Error> {
        if row.author_id != author.id {
            return Err(InvalidRow::new("comment", "author join mismatch"));
        }
        Ok(Comment {
            id: CommentId::new(row.id),
            post: PostId::new(row.post_id),
            author: author.try_into()?,
            text: row.text,
            created: row.created,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub(crate) struct NewCommentRow<'a> {
    pub post_id: i64,
    pub author_id: Uuid,
    pub text: &'a str,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = follows)]
pub(crate) struct NewFollowRow {
    pub user_id: Uuid,
    pub following_id: Uuid,
}
