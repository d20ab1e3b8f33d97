//! Domain primitives, access rules and services.
//!
//! Purpose: hold the blog's entities, the ownership guard, the parent
//! resolution and follow validation rules, and the services implementing the
//! driving ports. Nothing here depends on actix or Diesel.
//!
//! Public surface:
//! - [`Error`]/[`ErrorCode`]: transport-agnostic failures.
//! - [`Actor`]: the acting identity passed to every operation.
//! - Entities: [`User`], [`Group`], [`Post`], [`Comment`], [`Follow`].
//! - [`access`]: the ownership guard.
//! - Services: [`GroupsService`], [`PostsService`], [`CommentsService`],
//!   [`FollowsService`].

pub mod access;
pub mod auth;
pub mod comment;
pub mod comments_service;
pub mod error;
pub mod follow;
pub mod follows_service;
pub mod group;
pub mod groups_service;
pub mod ids;
pub mod ports;
pub mod post;
pub mod posts_service;
pub mod slug;
pub mod trace_id;
pub mod user;
pub mod validation;

#[cfg(test)]
pub(crate) mod service_test_helpers;

pub use self::auth::{Actor, LoginCredentials, LoginValidationError};
pub use self::comment::{Comment, NewComment};
pub use self::comments_service::CommentsService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::follow::{Follow, duplicate_follow_error, ensure_not_self_follow, unknown_user_error};
pub use self::follows_service::FollowsService;
pub use self::group::Group;
pub use self::groups_service::GroupsService;
pub use self::ids::{CommentId, GroupId, PostId};
pub use self::post::{NewPost, Post, PostChanges};
pub use self::posts_service::PostsService;
pub use self::slug::{Slug, SlugValidationError};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId, UserValidationError, Username};
