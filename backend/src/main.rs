//! Blog API entry point: loads settings, migrates the schema, and serves the
//! REST API with health probes and OpenAPI docs.

mod server;

use actix_web::cookie::SameSite;
use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use blog_api::AppSettings;
use blog_api::inbound::http::health::HealthState;
use blog_api::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use server::{ServerConfig, create_server, load_session_key};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let database_url = settings
        .database_url()
        .ok_or_else(|| std::io::Error::other("BLOG_DATABASE_URL must be set"))?;

    let key = load_session_key(&settings)?;

    run_migrations(database_url)
        .await
        .map_err(std::io::Error::other)?;
    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
    )
    .await
    .map_err(std::io::Error::other)?;

    let config = ServerConfig::new(
        key,
        settings.cookie_secure(),
        SameSite::Lax,
        settings.bind_addr(),
        pool,
    )
    .with_max_page_limit(settings.max_page_limit());
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(server::build_prometheus()?));

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
