//! Diesel-backed `LoginService` adapter.
//!
//! Passwords are stored as Argon2 PHC strings in `users.password_hash`.
//! Verification runs on the blocking pool; unknown usernames and wrong
//! passwords produce the same `Unauthorized` error.

use async_trait::async_trait;
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use zeroize::Zeroizing;

use crate::domain::ports::LoginService;
use crate::domain::{Error, LoginCredentials, UserId};

use super::models::CredentialRow;
use super::pool::{DbPool, PoolError};
use super::schema::users;

const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Diesel-backed [`LoginService`].
#[derive(Clone)]
pub struct DieselLoginService {
    pool: DbPool,
}

impl DieselLoginService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn find_credentials(&self, username: &str) -> Result<Option<CredentialRow>, Error> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        users::table
            .filter(users::username.eq(username))
            .select(CredentialRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| Error::internal(format!("credential lookup failed: {err}")))
    }
}

fn map_pool_error(error: PoolError) -> Error {
    Error::service_unavailable(format!("login store unavailable: {error}"))
}

/// Check `password` against a stored Argon2 PHC string.
///
/// A malformed stored hash is an internal error, not a failed login.
fn verify_password(stored_hash: &str, password: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|err| Error::internal(format!("invalid stored password hash: {err}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[async_trait]
impl LoginService for DieselLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let Some(row) = self.find_credentials(credentials.username()).await? else {
            debug!(username = credentials.username(), "login for unknown user");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };

        let password = Zeroizing::new(credentials.password().to_owned());
        let hash = row.password_hash;
        let verified = tokio::task::spawn_blocking(move || verify_password(&hash, &password))
            .await
            .map_err(|err| Error::internal(format!("password verification aborted: {err}")))??;

        if !verified {
            debug!(username = credentials.username(), "login with wrong password");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }
        Ok(UserId::from_uuid(row.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use argon2::PasswordHasher;
    use argon2::password_hash::SaltString;
    use rstest::{fixture, rstest};

    #[fixture]
    fn stored_hash() -> String {
        let salt = SaltString::encode_b64(b"blog-test-salt!!").expect("valid salt");
        Argon2::default()
            .hash_password(b"correct horse", &salt)
            .expect("hash password")
            .to_string()
    }

    #[rstest]
    fn matching_password_verifies(stored_hash: String) {
        assert_eq!(verify_password(&stored_hash, "correct horse"), Ok(true));
    }

    #[rstest]
    fn wrong_password_is_rejected(stored_hash: String) {
        assert_eq!(verify_password(&stored_hash, "battery staple"), Ok(false));
    }

    #[rstest]
    fn malformed_hash_is_internal() {
        let err = verify_password("plaintext", "anything").expect_err("bad hash");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[rstest]
    fn pool_exhaustion_is_service_unavailable() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
