//! Shared Diesel error mapping for the repository adapters.
//!
//! Each adapter passes its own port error constructors, so Diesel and pool
//! types never escape this module.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error.
pub(crate) fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map Diesel errors onto query/connection constructors.
///
/// A closed connection is a connection error; everything else, including
/// constraint violations the caller did not handle, is a query error.
pub(crate) fn map_basic_diesel_error<E, Q, C>(error: DieselError, query: Q, connection: C) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), constraint = ?info.constraint_name(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        _ => query("database error"),
    }
}

/// True when `error` is a unique-constraint violation on `constraint`.
pub(crate) fn is_unique_violation(error: &DieselError, constraint: &str) -> bool {
    violates(error, DatabaseErrorKind::UniqueViolation, constraint)
}

/// True when `error` is a foreign-key violation on `constraint`.
pub(crate) fn is_foreign_key_violation(error: &DieselError, constraint: &str) -> bool {
    violates(error, DatabaseErrorKind::ForeignKeyViolation, constraint)
}

fn violates(error: &DieselError, expected: DatabaseErrorKind, constraint: &str) -> bool {
    match error {
        DieselError::DatabaseError(kind, info) => {
            std::mem::discriminant(kind) == std::mem::discriminant(&expected)
                && info.constraint_name() == Some(constraint)
        }
        _ => false,
    }
}
