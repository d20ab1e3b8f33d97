//! Ownership guard.
//!
//! Access is decided in two steps. [`authorize_request`] runs before any
//! lookup and only needs the resource kind, the action and the actor: reads
//! of public resources always pass, anonymous writes fail with
//! `Unauthorized`. [`authorize`] runs once the target has been loaded and
//! additionally requires the actor to be the author for owner-only actions.
//! Services call them in that order so a caller learns about missing
//! authentication (401) before a missing resource (404), and about a missing
//! resource before an ownership failure (403).

use tracing::debug;

use crate::domain::{Actor, Error, UserId};

/// Resource families governed by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Read-only groups.
    Group,
    /// Author-owned posts.
    Post,
    /// Author-owned comments.
    Comment,
    /// Follower-owned follow edges.
    Follow,
}

impl ResourceKind {
    fn noun(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Post => "post",
            Self::Comment => "comment",
            Self::Follow => "follow",
        }
    }
}

/// Operations a caller may attempt on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Enumerate resources.
    List,
    /// Fetch one resource.
    Retrieve,
    /// Create a resource.
    Create,
    /// Replace a resource.
    Update,
    /// Change some fields of a resource.
    PartialUpdate,
    /// Remove a resource.
    Delete,
}

impl Action {
    /// Whether the action leaves state untouched.
    pub const fn is_read(self) -> bool {
        matches!(self, Self::List | Self::Retrieve)
    }

    /// Whether only the resource owner may perform the action.
    pub const fn is_owner_only(self) -> bool {
        matches!(self, Self::Update | Self::PartialUpdate | Self::Delete)
    }
}

/// How an update request treats omitted fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Required fields must be supplied.
    Full,
    /// Every field is optional.
    Partial,
}

impl UpdateMode {
    /// Guard action corresponding to the mode.
    pub const fn action(self) -> Action {
        match self {
            Self::Full => Action::Update,
            Self::Partial => Action::PartialUpdate,
        }
    }
}

/// Resources with a single owning author.
pub trait Owned {
    /// Identifier of the owning user.
    fn author_id(&self) -> &UserId;
}

/// Request-level gate, evaluated before the target is loaded.
///
/// # Errors
/// - `Unauthorized` when an anonymous actor attempts a write or touches
///   follow edges.
/// - `Forbidden` for writes to groups and for follow actions other than
///   list/create.
///
/// # Examples
/// ```
/// use blog_api::domain::access::{authorize_request, Action, ResourceKind};
/// use blog_api::domain::{Actor, ErrorCode, UserId};
///
/// assert!(authorize_request(ResourceKind::Post, Action::List, &Actor::Anonymous).is_ok());
///
/// let err = authorize_request(ResourceKind::Post, Action::Create, &Actor::Anonymous)
///     .expect_err("anonymous write");
/// assert_eq!(err.code(), ErrorCode::Unauthorized);
///
/// let alice = Actor::Authenticated(UserId::random());
/// assert!(authorize_request(ResourceKind::Post, Action::Create, &alice).is_ok());
/// ```
pub fn authorize_request(kind: ResourceKind, action: Action, actor: &Actor) -> Result<(), Error> {
    let public_read = action.is_read() && kind != ResourceKind::Follow;
    if public_read {
        return Ok(());
    }

    actor.require_authenticated().inspect_err(|_| {
        debug!(resource = kind.noun(), ?action, "anonymous access denied");
    })?;

    match kind {
        ResourceKind::Group => Err(deny(kind, action, "groups are read-only")),
        ResourceKind::Follow if !matches!(action, Action::List | Action::Create) => Err(deny(
            kind,
            action,
            "follow edges can only be listed or created",
        )),
        _ => Ok(()),
    }
}

/// Object-level gate, evaluated once `resource` has been loaded.
///
/// Re-applies [`authorize_request`] and, for owner-only actions, requires the
/// actor to be the resource's author.
///
/// # Errors
/// Everything [`authorize_request`] returns, plus `Forbidden` when a
/// non-author attempts an owner-only action.
pub fn authorize<R>(
    kind: ResourceKind,
    action: Action,
    resource: &R,
    actor: &Actor,
) -> Result<(), Error>
where
    R: Owned + ?Sized,
{
    authorize_request(kind, action, actor)?;
    if action.is_owner_only() && !actor.is(resource.author_id()) {
        let message = format!("only the author may modify this {}", kind.noun());
        return Err(deny(kind, action, &message));
    }
    Ok(())
}

fn deny(kind: ResourceKind, action: Action, message: &str) -> Error {
    debug!(resource = kind.noun(), ?action, "permission denied");
    Error::forbidden(message)
}
