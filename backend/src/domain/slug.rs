//! URL-safe group slugs.
//!
//! Slugs are non-empty identifiers of ASCII letters, digits, hyphens and
//! underscores, at most [`SLUG_MAX`] characters long.

use std::fmt;

/// Maximum allowed slug length.
pub const SLUG_MAX: usize = 50;

/// Validation failures for [`Slug`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugValidationError {
    /// The slug was blank.
    #[error("slug must not be empty")]
    Empty,
    /// The slug exceeded [`SLUG_MAX`] characters.
    #[error("slug must be at most {max} characters")]
    TooLong {
        /// Maximum accepted length.
        max: usize,
    },
    /// The slug contained characters outside the allowed set.
    #[error("slug may only contain letters, digits, hyphens and underscores")]
    InvalidCharacters,
}

/// Validated group slug.
///
/// # Examples
/// ```
/// use blog_api::domain::Slug;
///
/// assert!(Slug::new("rust-news").is_ok());
/// assert!(Slug::new("rust news").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Validate and construct a slug.
    pub fn new(value: impl Into<String>) -> Result<Self, SlugValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(SlugValidationError::Empty);
        }
        if value.chars().count() > SLUG_MAX {
            return Err(SlugValidationError::TooLong { max: SLUG_MAX });
        }
        if !has_allowed_slug_chars(&value) {
            return Err(SlugValidationError::InvalidCharacters);
        }
        Ok(Self(value))
    }
}

fn has_allowed_slug_chars(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}
