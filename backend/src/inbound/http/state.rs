//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CommentsCommand, CommentsQuery, FollowsCommand, FollowsQuery, GroupsQuery, LoginService,
    PostsCommand, PostsQuery,
};

/// Default upper bound for the `limit` query parameter.
pub const DEFAULT_MAX_PAGE_LIMIT: usize = 100;

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub login: Arc<dyn LoginService>,
    pub groups: Arc<dyn GroupsQuery>,
    pub posts_query: Arc<dyn PostsQuery>,
    pub posts: Arc<dyn PostsCommand>,
    pub comments_query: Arc<dyn CommentsQuery>,
    pub comments: Arc<dyn CommentsCommand>,
    pub follows_query: Arc<dyn FollowsQuery>,
    pub follows: Arc<dyn FollowsCommand>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub groups: Arc<dyn GroupsQuery>,
    pub posts_query: Arc<dyn PostsQuery>,
    pub posts: Arc<dyn PostsCommand>,
    pub comments_query: Arc<dyn CommentsQuery>,
    pub comments: Arc<dyn CommentsCommand>,
    pub follows_query: Arc<dyn FollowsQuery>,
    pub follows: Arc<dyn FollowsCommand>,
    pub max_page_limit: usize,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state with the default page-size cap.
    pub fn new(ports: HttpStatePorts) -> Self {
        Self::with_max_page_limit(ports, DEFAULT_MAX_PAGE_LIMIT)
    }

    /// Construct state with an explicit page-size cap.
    ///
    /// A cap of zero is raised to one so a valid `limit` always selects
    /// something.
    pub fn with_max_page_limit(ports: HttpStatePorts, max_page_limit: usize) -> Self {
        let HttpStatePorts {
            login,
            groups,
            posts_query,
            posts,
            comments_query,
            comments,
            follows_query,
            follows,
        } = ports;
        Self {
            login,
            groups,
            posts_query,
            posts,
            comments_query,
            comments,
            follows_query,
            follows,
            max_page_limit: max_page_limit.max(1),
        }
    }
}
