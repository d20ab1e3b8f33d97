//! Application settings loaded via OrthoConfig.
//!
//! Values layer CLI flags over `BLOG_*` environment variables over an
//! optional configuration file.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::state::DEFAULT_MAX_PAGE_LIMIT;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Startup configuration for the blog API server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BLOG")]
pub struct AppSettings {
    /// PostgreSQL connection string. The server refuses to start without it.
    pub database_url: Option<String>,
    /// Listen address.
    pub bind_addr: Option<SocketAddr>,
    /// File holding the session signing key material.
    pub session_key_file: Option<PathBuf>,
    /// Fall back to a random session key when the key file is unreadable.
    pub session_allow_ephemeral: Option<bool>,
    /// Mark the session cookie `Secure`. Defaults to on.
    pub cookie_secure: Option<bool>,
    /// Upper bound applied to the `limit` query parameter.
    pub max_page_limit: Option<usize>,
    /// Connection pool size.
    pub db_max_connections: Option<u32>,
}

impl AppSettings {
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
            .unwrap_or_else(|| SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)))
    }

    pub fn session_key_file(&self) -> &Path {
        self.session_key_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_SESSION_KEY_FILE))
    }

    pub fn session_allow_ephemeral(&self) -> bool {
        self.session_allow_ephemeral.unwrap_or(false)
    }

    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure.unwrap_or(true)
    }

    pub fn max_page_limit(&self) -> usize {
        self.max_page_limit.unwrap_or(DEFAULT_MAX_PAGE_LIMIT)
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }
}
