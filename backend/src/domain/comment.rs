//! Comments attached to posts.

use chrono::{DateTime, Utc};

use crate::domain::access::Owned;
use crate::domain::{CommentId, PostId, User, UserId};

/// A comment on a post.
///
/// Both `post` and `author` are fixed at creation: the post comes from the
/// request path and the author from the acting identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Stable identifier.
    pub id: CommentId,
    /// The post this comment belongs to.
    pub post: PostId,
    /// The user who wrote the comment.
    pub author: User,
    /// Body text.
    pub text: String,
    /// Creation timestamp assigned by the store.
    pub created: DateTime<Utc>,
}

impl Owned for Comment {
    fn author_id(&self) -> &UserId {
        self.author.id()
    }
}

/// Values required to insert a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    /// Resolved parent post.
    pub post: PostId,
    /// Author, always the acting identity.
    pub author: UserId,
    /// Validated body text.
    pub text: String,
}
