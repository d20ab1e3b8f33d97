//! Shared builders for domain service tests.

use chrono::{TimeZone, Utc};

use crate::domain::{Comment, CommentId, Post, PostId, User, UserId, Username};

pub(crate) const ALICE_ID: &str = "11111111-1111-1111-1111-111111111111";
pub(crate) const BOB_ID: &str = "22222222-2222-2222-2222-222222222222";

pub(crate) fn user(id: &str, username: &str) -> User {
    User::new(
        UserId::new(id).expect("fixture id"),
        Username::new(username).expect("fixture username"),
    )
}

pub(crate) fn alice() -> User {
    user(ALICE_ID, "alice")
}

pub(crate) fn bob() -> User {
    user(BOB_ID, "bob")
}

pub(crate) fn post_by(id: i64, author: User) -> Post {
    Post {
        id: PostId::new(id),
        text: format!("post {id}"),
        pub_date: Utc
            .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
            .single()
            .expect("fixture timestamp"),
        author,
        image: None,
        group: None,
    }
}

pub(crate) fn comment_by(id: i64, post: i64, author: User) -> Comment {
    Comment {
        id: CommentId::new(id),
        post: PostId::new(post),
        author,
        text: format!("comment {id}"),
        created: Utc
            .with_ymd_and_hms(2024, 1, 2, 12, 0, 0)
            .single()
            .expect("fixture timestamp"),
    }
}
