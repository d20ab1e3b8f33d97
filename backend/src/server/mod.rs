//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod session_key;
mod state_builders;

pub use config::ServerConfig;
#[cfg(feature = "metrics")]
pub use metrics::build_prometheus;
pub use session_key::load_session_key;

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;
use state_builders::build_http_state;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use blog_api::Trace;
#[cfg(debug_assertions)]
use blog_api::doc::ApiDoc;
use blog_api::inbound::http::configure_api;
use blog_api::inbound::http::health::{HealthState, live, ready};
use blog_api::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Cookie holding the signed session.
const SESSION_COOKIE: &str = "session";

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn session_middleware(
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build()
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(session_middleware(key, cookie_secure, same_site))
        .wrap(Trace)
        .configure(configure_api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from a pre-built [`ServerConfig`].
///
/// The health state is marked ready once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
        #[cfg(feature = "metrics")]
        prometheus,
        ..
    } = config;

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use blog_api::domain::TRACE_ID_HEADER;
    use blog_api::outbound::persistence::{DbPool, PoolConfig};
    use rstest::rstest;

    async fn deps() -> AppDependencies {
        let pool = DbPool::new(PoolConfig::new("postgres://localhost:1/unreachable"))
            .await
            .expect("lazy pool");
        let config = ServerConfig::new(
            Key::generate(),
            false,
            SameSite::Lax,
            "127.0.0.1:0".parse().expect("addr"),
            pool,
        );
        let health_state = web::Data::new(HealthState::new());
        health_state.mark_ready();
        AppDependencies {
            health_state,
            http_state: build_http_state(&config),
            key: config.key,
            cookie_secure: false,
            same_site: SameSite::Lax,
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn probes_are_mounted_and_traced() {
        let app = test::init_service(build_app(deps().await)).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key(TRACE_ID_HEADER));
    }

    #[rstest]
    #[actix_web::test]
    async fn api_scope_is_mounted() {
        let app = test::init_service(build_app(deps().await)).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post().uri("/api/v1/logout").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }
}
