//! HTTP server configuration object and helpers.

use actix_web::cookie::{Key, SameSite};
use blog_api::inbound::http::state::DEFAULT_MAX_PAGE_LIMIT;
use blog_api::outbound::persistence::DbPool;
use std::net::SocketAddr;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) max_page_limit: usize,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(
        key: Key,
        cookie_secure: bool,
        same_site: SameSite,
        bind_addr: SocketAddr,
        db_pool: DbPool,
    ) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool,
            max_page_limit: DEFAULT_MAX_PAGE_LIMIT,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Cap applied to the `limit` query parameter of paginated listings.
    #[must_use]
    pub fn with_max_page_limit(mut self, max_page_limit: usize) -> Self {
        self.max_page_limit = max_page_limit;
        self
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
