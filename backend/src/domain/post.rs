//! Blog posts.

use chrono::{DateTime, Utc};

use crate::domain::access::Owned;
use crate::domain::{GroupId, PostId, User, UserId};

/// A published post.
///
/// `author` is fixed when the post is created and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Stable identifier.
    pub id: PostId,
    /// Body text.
    pub text: String,
    /// Publication timestamp assigned by the store.
    pub pub_date: DateTime<Utc>,
    /// The user who wrote the post.
    pub author: User,
    /// Optional image reference.
    pub image: Option<String>,
    /// Optional group the post is filed under.
    pub group: Option<GroupId>,
}

impl Owned for Post {
    fn author_id(&self) -> &UserId {
        self.author.id()
    }
}

/// Values required to insert a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    /// Author, always the acting identity.
    pub author: UserId,
    /// Validated body text.
    pub text: String,
    /// Optional image reference.
    pub image: Option<String>,
    /// Optional, already resolved, group.
    pub group: Option<GroupId>,
}

/// Field changes applied to an existing post.
///
/// `None` leaves a field untouched. For the nullable fields, `Some(None)`
/// clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    /// Replacement body text.
    pub text: Option<String>,
    /// Replacement image reference.
    pub image: Option<Option<String>>,
    /// Replacement group.
    pub group: Option<Option<GroupId>>,
}
