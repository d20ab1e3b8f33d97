//! Session signing key loading.

use std::io;
use std::path::Path;

use actix_web::cookie::Key;
use blog_api::AppSettings;
use tracing::warn;

/// Minimum key material accepted by [`Key::derive_from`].
const MIN_KEY_BYTES: usize = 32;

/// Derive the cookie key from the configured key file.
///
/// When the file is missing or too short, debug builds and deployments with
/// `session_allow_ephemeral` fall back to a random key; release builds
/// otherwise refuse to start.
///
/// # Errors
/// Returns an [`io::Error`] when no usable key is available and the fallback
/// is not permitted.
pub fn load_session_key(settings: &AppSettings) -> io::Result<Key> {
    let path = settings.session_key_file();
    let problem = match std::fs::read(path) {
        Ok(bytes) if bytes.len() >= MIN_KEY_BYTES => return Ok(Key::derive_from(&bytes)),
        Ok(bytes) => format!(
            "key material is {} bytes, need at least {MIN_KEY_BYTES}",
            bytes.len()
        ),
        Err(err) => err.to_string(),
    };
    fallback_key(path, &problem, cfg!(debug_assertions) || settings.session_allow_ephemeral())
}

fn fallback_key(path: &Path, problem: &str, allow_ephemeral: bool) -> io::Result<Key> {
    if allow_ephemeral {
        warn!(path = %path.display(), error = problem, "using temporary session key (dev only)");
        return Ok(Key::generate());
    }
    Err(io::Error::other(format!(
        "failed to read session key at {}: {problem}",
        path.display()
    )))
}
