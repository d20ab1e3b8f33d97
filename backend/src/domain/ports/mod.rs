//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`*Query`, `*Command`, [`LoginService`]) are what inbound adapters
//! call.

mod macros;
pub(crate) use macros::define_port_error;

mod comment_repository;
mod comments_command;
mod comments_query;
mod follow_repository;
mod follows_command;
mod follows_query;
mod group_repository;
mod groups_query;
mod login_service;
mod post_repository;
mod posts_command;
mod posts_query;
mod user_repository;

#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use comment_repository::{CommentRepository, CommentRepositoryError};
#[cfg(test)]
pub use comments_command::MockCommentsCommand;
pub use comments_command::{
    CommentsCommand, CreateCommentRequest, DeleteCommentRequest, UpdateCommentRequest,
};
#[cfg(test)]
pub use comments_query::MockCommentsQuery;
pub use comments_query::CommentsQuery;
#[cfg(test)]
pub use follow_repository::MockFollowRepository;
pub use follow_repository::{FollowRepository, FollowRepositoryError};
#[cfg(test)]
pub use follows_command::MockFollowsCommand;
pub use follows_command::{CreateFollowRequest, FollowsCommand};
#[cfg(test)]
pub use follows_query::MockFollowsQuery;
pub use follows_query::FollowsQuery;
#[cfg(test)]
pub use group_repository::MockGroupRepository;
pub use group_repository::{GroupRepository, GroupRepositoryError};
#[cfg(test)]
pub use groups_query::MockGroupsQuery;
pub use groups_query::GroupsQuery;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use post_repository::MockPostRepository;
pub use post_repository::{PostRepository, PostRepositoryError};
#[cfg(test)]
pub use posts_command::MockPostsCommand;
pub use posts_command::{CreatePostRequest, DeletePostRequest, PostsCommand, UpdatePostRequest};
#[cfg(test)]
pub use posts_query::MockPostsQuery;
pub use posts_query::{ListPostsRequest, PostsQuery};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
