//! Thematic groups that posts can be filed under.

use crate::domain::{GroupId, Slug};

/// A read-only community group.
///
/// Groups are curated outside the API; they have no owner and are visible to
/// everyone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Stable identifier.
    pub id: GroupId,
    /// Display title.
    pub title: String,
    /// Unique URL-safe handle.
    pub slug: Slug,
    /// Free-form description.
    pub description: String,
}
