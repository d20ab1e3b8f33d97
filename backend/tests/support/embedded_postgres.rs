//! Embedded PostgreSQL for the Diesel adapter suites.
//!
//! One shared cluster serves every test. A template database carries the
//! migrated schema and each test clones it into a throwaway database, so the
//! real constraints (unique follow edges, author foreign keys) are in force.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pg_embedded_setup_unpriv::test_support::hash_directory;
use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use postgres::{Client, NoTls};
use uuid::Uuid;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

static TEMPLATE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const TEMPLATE_NAME_PREFIX: &str = "blog_template";
const PROVISION_RETRIES: usize = 3;
const PROVISION_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Start (or reuse) the process-wide embedded cluster.
pub fn shared_cluster() -> Result<&'static ClusterHandle, String> {
    pg_embedded_setup_unpriv::test_support::shared_cluster_handle()
        .map_err(|err| format!("embedded cluster: {err:?}"))
}

/// Skip when `SKIP_TEST_CLUSTER` is truthy, otherwise fail loudly.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    let skip = std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);
    if skip {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

fn template_name() -> Result<String, String> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations");
    let hash = hash_directory(dir).map_err(|err| format!("hash migrations: {err}"))?;
    let short = hash.get(..8).unwrap_or(&hash);
    Ok(format!("{TEMPLATE_NAME_PREFIX}_{short}"))
}

fn ensure_template(cluster: &ClusterHandle) -> Result<String, String> {
    let name = template_name()?;
    let _lock = TEMPLATE_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let exists = cluster
        .database_exists(name.as_str())
        .map_err(|err| format!("template check: {err:?}"))?;
    if !exists {
        cluster
            .create_database(name.as_str())
            .map_err(|err| format!("create template: {err:?}"))?;
        let url = cluster.connection().database_url(&name);
        let mut conn = PgConnection::establish(&url).map_err(|err| format!("{err:?}"))?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|err| format!("migration: {err:?}"))?;
    }
    Ok(name)
}

/// Clone a fresh, migrated database for one test.
pub fn provision_database(cluster: &ClusterHandle) -> Result<TemporaryDatabase, String> {
    let mut last_error = String::from("no attempt made");
    for attempt in 1..=PROVISION_RETRIES {
        let outcome = ensure_template(cluster).and_then(|template| {
            cluster
                .temporary_database_from_template(
                    format!("test_{}", Uuid::new_v4().simple()).as_str(),
                    template.as_str(),
                )
                .map_err(|err| format!("clone template: {err:?}"))
        });
        match outcome {
            Ok(database) => return Ok(database),
            Err(err) => last_error = format!("attempt {attempt}/{PROVISION_RETRIES}: {err}"),
        }
        std::thread::sleep(PROVISION_RETRY_DELAY);
    }
    Err(last_error)
}

/// Insert a user row directly; the adapters never create accounts.
pub fn seed_user(url: &str, username: &str) -> Result<Uuid, String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| err.to_string())?;
    let id = Uuid::new_v4();
    client
        .execute(
            "INSERT INTO users (id, username, password_hash) VALUES ($1, $2, 'unused')",
            &[&id, &username],
        )
        .map_err(|err| err.to_string())?;
    Ok(id)
}
