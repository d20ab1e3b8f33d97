//! Acting identities and login credentials.
//!
//! Every domain operation receives the caller as an explicit [`Actor`]; the
//! inbound adapter derives it from the session before calling a port.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::{Error, UserId};

/// The identity a request executes under.
///
/// # Examples
/// ```
/// use blog_api::domain::{Actor, UserId};
///
/// let anonymous = Actor::Anonymous;
/// assert!(anonymous.user_id().is_none());
///
/// let alice = Actor::Authenticated(UserId::random());
/// assert!(alice.require_authenticated().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    /// No valid session.
    Anonymous,
    /// A logged-in user.
    Authenticated(UserId),
}

impl Actor {
    /// The authenticated user's id, if any.
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(id) => Some(id),
        }
    }

    /// Return the user id or an `Unauthorized` error.
    pub fn require_authenticated(&self) -> Result<&UserId, Error> {
        self.user_id()
            .ok_or_else(|| Error::unauthorized("authentication credentials were not provided"))
    }

    /// Whether the actor is the user identified by `id`.
    pub fn is(&self, id: &UserId) -> bool {
        self.user_id() == Some(id)
    }
}

impl From<Option<UserId>> for Actor {
    fn from(value: Option<UserId>) -> Self {
        value.map_or(Self::Anonymous, Self::Authenticated)
    }
}

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `password` is non-empty and kept verbatim; it is zeroed on drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username used for the account lookup.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password supplied by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
