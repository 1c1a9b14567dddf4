//! Translation of pool and Diesel failures into [`BackendError`].
//!
//! Messages are fixed strings; raw driver text is only logged at debug level.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::BackendError;

use super::pool::PoolError;

/// Pool failures always mean the backend is unreachable.
pub(crate) fn map_pool_error(error: PoolError) -> BackendError {
    debug!(%error, "connection pool failure");
    BackendError::connection("database unavailable")
}

/// Map a Diesel failure using generic constraint messages.
pub(crate) fn map_diesel_error(error: DieselError) -> BackendError {
    map_diesel_error_with(error, "record already exists")
}

/// Map a Diesel failure, reporting unique violations as `duplicate`.
pub(crate) fn map_diesel_error_with(error: DieselError, duplicate: &'static str) -> BackendError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), constraint = ?info.constraint_name(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => BackendError::query("record not found"),
        DieselError::QueryBuilderError(_) => BackendError::query("database query error"),
        DieselError::DatabaseError(kind, _) => match kind {
            DatabaseErrorKind::ClosedConnection => {
                BackendError::connection("database connection closed")
            }
            DatabaseErrorKind::UniqueViolation => BackendError::constraint(duplicate),
            DatabaseErrorKind::ForeignKeyViolation => {
                BackendError::constraint("referenced record does not exist")
            }
            DatabaseErrorKind::CheckViolation | DatabaseErrorKind::NotNullViolation => {
                BackendError::constraint("value rejected by the database")
            }
            _ => BackendError::query("database error"),
        },
        _ => BackendError::query("database error"),
    }
}
