//! Blog authors and followers.
//!
//! Users are created outside this service; the API only reads them to render
//! authorship and to resolve follow targets by username.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors for user identity components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was blank.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier was not a canonical UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
    /// The username was blank.
    #[error("username must not be empty")]
    EmptyUsername,
    /// The username exceeded [`USERNAME_MAX`] characters.
    #[error("username must be at most {max} characters")]
    UsernameTooLong {
        /// Maximum accepted length.
        max: usize,
    },
    /// The username contained characters outside the allowed set.
    #[error("username may only contain letters, digits and @/./+/-/_")]
    UsernameInvalidCharacters,
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid, String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Wrap an already parsed UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, uuid.to_string())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }

        let parsed = Uuid::parse_str(&id).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed, id))
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.1
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Maximum allowed length for a username.
pub const USERNAME_MAX: usize = 150;

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();

fn username_regex() -> &'static Regex {
    USERNAME_RE.get_or_init(|| {
        Regex::new(r"^[\w.@+-]+$")
            .unwrap_or_else(|error| panic!("username regex failed to compile: {error}"))
    })
}

/// Unique public handle of a user.
///
/// ## Invariants
/// - Between 1 and [`USERNAME_MAX`] characters.
/// - Only letters, digits and `@ . + - _`.
///
/// # Examples
/// ```
/// use blog_api::domain::Username;
///
/// assert!(Username::new("ada.lovelace").is_ok());
/// assert!(Username::new("ada lovelace").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(username.into())
    }

    fn from_owned(username: String) -> Result<Self, UserValidationError> {
        if username.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if username.chars().count() > USERNAME_MAX {
            return Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX });
        }
        if !username_regex().is_match(&username) {
            return Err(UserValidationError::UsernameInvalidCharacters);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// A registered user as seen by the blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
}

impl User {
    /// Build a user from validated components.
    pub fn new(id: UserId, username: Username) -> Self {
        Self { id, username }
    }

    /// Fallible constructor from raw strings.
    pub fn try_from_strings(
        id: impl AsRef<str>,
        username: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(UserId::new(id)?, Username::new(username)?))
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Public handle rendered as the author of content.
    pub fn username(&self) -> &Username {
        &self.username
    }
}
