//! Driving port for login.
//!
//! Inbound adapters call it to turn credentials into a user id without
//! knowing how passwords are stored.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, UserId};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    ///
    /// Unknown usernames and wrong passwords both yield `Unauthorized` with
    /// the same message.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}
