//! Directed follow edges between users.

use serde_json::json;

use crate::domain::{Error, User, UserId};

/// Detail code reported when a user tries to follow themselves.
pub const SELF_FOLLOW_CODE: &str = "self_follow";
/// Detail code reported when the edge already exists.
pub const DUPLICATE_FOLLOW_CODE: &str = "duplicate_follow";
/// Detail code reported when the followed username is unknown.
pub const USER_NOT_FOUND_CODE: &str = "user_not_found";

/// "`user` is subscribed to `following`".
///
/// ## Invariants
/// - `user` and `following` are different users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    /// The follower; always the identity that created the edge.
    pub user: User,
    /// The followed user.
    pub following: User,
}

/// Reject edges that point back at the follower.
///
/// # Examples
/// ```
/// use blog_api::domain::{ensure_not_self_follow, UserId};
///
/// let alice = UserId::random();
/// assert!(ensure_not_self_follow(&alice, &alice).is_err());
/// assert!(ensure_not_self_follow(&alice, &UserId::random()).is_ok());
/// ```
pub fn ensure_not_self_follow(follower: &UserId, following: &UserId) -> Result<(), Error> {
    if follower == following {
        return Err(Error::invalid_request("cannot follow yourself").with_details(json!({
            "field": "following",
            "code": SELF_FOLLOW_CODE,
        })));
    }
    Ok(())
}

/// Error returned when an identical edge already exists.
pub fn duplicate_follow_error() -> Error {
    Error::invalid_request("already following this user").with_details(json!({
        "field": "following",
        "code": DUPLICATE_FOLLOW_CODE,
    }))
}

/// Error returned when the followed username does not resolve to a user.
pub fn unknown_user_error(username: &str) -> Error {
    Error::not_found("user not found").with_details(json!({
        "field": "following",
        "value": username,
        "code": USER_NOT_FOUND_CODE,
    }))
}
