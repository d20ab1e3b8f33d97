//! Driving port for reading posts.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Actor, Error, Post, PostId};

/// Request to list posts.
#[derive(Debug, Clone)]
pub struct ListPostsRequest {
    /// Caller identity; anonymous callers may read.
    pub actor: Actor,
    /// Window to select, or `None` for every post.
    pub window: Option<PageRequest>,
}

/// Use-case port for public post reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostsQuery: Send + Sync {
    /// Posts in the requested window together with the total count.
    ///
    /// A window past the end yields an empty page, not an error.
    async fn list_posts(&self, request: ListPostsRequest) -> Result<Page<Post>, Error>;

    /// One post, or `NotFound`.
    async fn get_post(&self, actor: &Actor, id: PostId) -> Result<Post, Error>;
}
