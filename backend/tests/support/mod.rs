//! Shared helpers for the HTTP behaviour suites.
//!
//! The app under test runs the real domain services and HTTP adapter against
//! [`MemoryStore`], with the same session and trace middleware as the server.

pub mod memory_store;

use std::sync::Arc;

use actix_http::Request;
use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use blog_api::Trace;
use blog_api::domain::{CommentsService, FollowsService, GroupsService, PostsService};
use blog_api::inbound::http::configure_api;
use blog_api::inbound::http::state::{HttpState, HttpStatePorts};
use serde_json::{Value, json};

pub use memory_store::MemoryStore;

/// Build `HttpState` over one store, wiring the real services.
pub fn http_state(store: &Arc<MemoryStore>, max_page_limit: usize) -> web::Data<HttpState> {
    let groups = Arc::new(GroupsService::new(store.clone()));
    let posts = Arc::new(PostsService::new(store.clone(), store.clone()));
    let comments = Arc::new(CommentsService::new(store.clone(), store.clone()));
    let follows = Arc::new(FollowsService::new(store.clone(), store.clone()));
    web::Data::new(HttpState::with_max_page_limit(
        HttpStatePorts {
            login: store.clone(),
            groups,
            posts_query: posts.clone(),
            posts,
            comments_query: comments.clone(),
            comments,
            follows_query: follows.clone(),
            follows,
        },
        max_page_limit,
    ))
}

/// Initialise the app under test.
pub async fn spawn_app(
    store: &Arc<MemoryStore>,
    max_page_limit: usize,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".into())
        .cookie_secure(false)
        .build();
    test::init_service(
        App::new()
            .app_data(http_state(store, max_page_limit))
            .wrap(session)
            .wrap(Trace)
            .configure(configure_api),
    )
    .await
}

/// Log in through `POST /api/v1/login` and return the session cookie.
pub async fn login<S, B>(app: &S, username: &str, password: &str) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": username, "password": password }))
            .to_request(),
    )
    .await;
    assert!(res.status().is_success(), "login failed: {}", res.status());
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}

/// Send a request and return the status plus JSON body (`Null` when empty).
pub async fn send<S, B>(app: &S, req: test::TestRequest) -> (u16, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(app, req.to_request()).await;
    let status = res.status().as_u16();
    let bytes = test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, body)
}

/// Attach an optional session cookie to a request.
pub fn with_session(req: test::TestRequest, cookie: Option<&Cookie<'static>>) -> test::TestRequest {
    match cookie {
        Some(cookie) => req.cookie(cookie.clone()),
        None => req,
    }
}
