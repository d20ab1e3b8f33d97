//! Follow-edge service.
//!
//! Validation runs in a fixed order before anything is written: the target
//! username must resolve to a user, the target must not be the follower, and
//! the edge must not already exist. The store's unique index backs the last
//! check; a constraint violation raised by a concurrent insert is reported
//! exactly like the pre-insert duplicate check.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::access::{Action, ResourceKind, authorize_request};
use crate::domain::ports::{
    CreateFollowRequest, FollowRepository, FollowRepositoryError, FollowsCommand, FollowsQuery,
    UserRepository, UserRepositoryError,
};
use crate::domain::validation::missing_field_error;
use crate::domain::{
    Actor, Error, Follow, User, UserId, Username, duplicate_follow_error, ensure_not_self_follow,
    unknown_user_error,
};

fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_follow_error(error: FollowRepositoryError) -> Error {
    match error {
        FollowRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("follow repository unavailable: {message}"))
        }
        FollowRepositoryError::Query { message } => {
            Error::internal(format!("follow repository error: {message}"))
        }
        FollowRepositoryError::Duplicate => duplicate_follow_error(),
    }
}

/// Follow service implementing [`FollowsQuery`] and [`FollowsCommand`].
#[derive(Clone)]
pub struct FollowsService<U, F> {
    users: Arc<U>,
    follows: Arc<F>,
}

impl<U, F> FollowsService<U, F> {
    /// Create a new service over the user and follow repositories.
    pub fn new(users: Arc<U>, follows: Arc<F>) -> Self {
        Self { users, follows }
    }
}

impl<U, F> FollowsService<U, F>
where
    U: UserRepository,
    F: FollowRepository,
{
    /// Validate a prospective edge from `follower` to `following_username`.
    ///
    /// Returns the resolved target user.
    ///
    /// # Errors
    /// - `NotFound` when the username does not resolve to a user.
    /// - `InvalidRequest` ("cannot follow yourself") for a self-follow.
    /// - `InvalidRequest` ("already following this user") for an existing
    ///   edge.
    pub async fn validate_follow(
        &self,
        follower: &UserId,
        following_username: &str,
    ) -> Result<User, Error> {
        let username = Username::new(following_username)
            .map_err(|_| unknown_user_error(following_username))?;
        let following = self
            .users
            .find_by_username(&username)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| unknown_user_error(following_username))?;

        ensure_not_self_follow(follower, following.id())?;

        let exists = self
            .follows
            .exists(follower, following.id())
            .await
            .map_err(map_follow_error)?;
        if exists {
            debug!(%follower, following = %following.username(), "duplicate follow rejected");
            return Err(duplicate_follow_error());
        }
        Ok(following)
    }

    async fn load_follower(&self, id: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::unauthorized("session user no longer exists"))
    }
}

#[async_trait]
impl<U, F> FollowsQuery for FollowsService<U, F>
where
    U: UserRepository,
    F: FollowRepository,
{
    async fn list_follows(
        &self,
        actor: &Actor,
        search: Option<String>,
    ) -> Result<Vec<Follow>, Error> {
        authorize_request(ResourceKind::Follow, Action::List, actor)?;
        let follower = actor.require_authenticated()?;

        let filter = match search.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(term) => match Username::new(term) {
                Ok(username) => Some(username),
                // No user can carry an invalid username, so nothing matches.
                Err(_) => return Ok(Vec::new()),
            },
        };

        self.follows
            .list_for_follower(follower, filter)
            .await
            .map_err(map_follow_error)
    }
}

#[async_trait]
impl<U, F> FollowsCommand for FollowsService<U, F>
where
    U: UserRepository,
    F: FollowRepository,
{
    async fn create_follow(&self, request: CreateFollowRequest) -> Result<Follow, Error> {
        let CreateFollowRequest { actor, following } = request;
        authorize_request(ResourceKind::Follow, Action::Create, &actor)?;
        let follower_id = actor.require_authenticated()?;

        let following_username = following
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| missing_field_error("following"))?;
        let user = self.load_follower(follower_id).await?;
        let following = self
            .validate_follow(follower_id, &following_username)
            .await?;

        self.follows
            .create(follower_id, following.id())
            .await
            .map_err(map_follow_error)?;
        info!(
            user = %user.username(),
            following = %following.username(),
            "follow edge created"
        );
        Ok(Follow { user, following })
    }
}

#[cfg(test)]
#[path = "follows_service_tests.rs"]
mod tests;
