//! Session helpers that turn the cookie session into an acting identity.
//!
//! Handlers never read the session directly: they ask [`SessionContext`] for
//! the [`Actor`] and hand it to a domain port.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Actor, Error, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";

/// Newtype wrapper exposing identity-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated user's id in the session cookie.
    pub fn persist_user(&self, user_id: &UserId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, user_id.as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Drop all session state, logging the caller out.
    pub fn purge(&self) {
        self.0.purge();
    }

    /// Current user id, if the session carries a valid one.
    ///
    /// A tampered or malformed id is treated as no session at all.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        let id = self
            .0
            .get::<String>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(id.and_then(|raw| match UserId::new(raw) {
            Ok(id) => Some(id),
            Err(error) => {
                warn!(%error, "invalid user id in session cookie");
                None
            }
        }))
    }

    /// The acting identity for this request.
    pub fn actor(&self) -> Result<Actor, Error> {
        self.user_id().map(Actor::from)
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
