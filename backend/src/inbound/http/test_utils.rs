//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_service::Service;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::{HttpResponse, test, web};

use crate::domain::ports::{
    MockCommentsCommand, MockCommentsQuery, MockFollowsCommand, MockFollowsQuery,
    MockGroupsQuery, MockLoginService, MockPostsCommand, MockPostsQuery,
};
use crate::domain::{Error, UserId};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Name of the session cookie used by test apps.
pub const SESSION_COOKIE: &str = "session";

/// Build a session middleware configured for tests.
///
/// Generates a fresh key per invocation and disables the `Secure` flag for
/// plain-HTTP test requests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_secure(false)
        .build()
}

/// Extract the session cookie set by a response.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// Mock port bundle; set expectations on the fields, then convert into
/// [`HttpState`].
#[derive(Default)]
pub struct MockPorts {
    pub login: MockLoginService,
    pub groups: MockGroupsQuery,
    pub posts_query: MockPostsQuery,
    pub posts: MockPostsCommand,
    pub comments_query: MockCommentsQuery,
    pub comments: MockCommentsCommand,
    pub follows_query: MockFollowsQuery,
    pub follows: MockFollowsCommand,
}

impl MockPorts {
    /// Wrap the mocks into handler state with the given page-size cap.
    pub fn into_state(self, max_page_limit: usize) -> web::Data<HttpState> {
        let ports = HttpStatePorts {
            login: Arc::new(self.login),
            groups: Arc::new(self.groups),
            posts_query: Arc::new(self.posts_query),
            posts: Arc::new(self.posts),
            comments_query: Arc::new(self.comments_query),
            comments: Arc::new(self.comments),
            follows_query: Arc::new(self.follows_query),
            follows: Arc::new(self.follows),
        };
        web::Data::new(HttpState::with_max_page_limit(ports, max_page_limit))
    }
}

/// Log in through a stub route and return the resulting session cookie.
pub async fn login_cookie<S, B>(app: &S, user_id: &UserId) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri(&format!("{LOGIN_AS_PATH}/{user_id}"))
        .to_request();
    let res = test::call_service(app, req).await;
    session_cookie(&res)
}

/// Path of the stub route registered by [`login_as_route`].
pub const LOGIN_AS_PATH: &str = "/__test/login-as";

/// Route that persists an arbitrary user id in the session, bypassing
/// credential checks.
pub fn login_as_route(cfg: &mut web::ServiceConfig) {
    cfg.route(
        &format!("{LOGIN_AS_PATH}/{{id}}"),
        web::post().to(
            |session: SessionContext, path: web::Path<String>| async move {
                let id = UserId::new(path.into_inner())
                    .map_err(|err| Error::invalid_request(err.to_string()))?;
                session.persist_user(&id)?;
                Ok::<_, Error>(HttpResponse::Ok().finish())
            },
        ),
    );
}
