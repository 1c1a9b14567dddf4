//! Diesel-backed `LoginService` checking passwords with pgcrypto.
//!
//! Password digests never leave Postgres: the query compares
//! `crypt($password, password_hash)` server-side and returns only the id.

use async_trait::async_trait;
use diesel::sql_query;
use diesel::sql_types::{Text, Uuid as SqlUuid};
use diesel::{OptionalExtension, QueryableByName};
use diesel_async::RunQueryDsl;
use tracing::warn;
use uuid::Uuid;

use crate::domain::ports::{BackendError, LoginService};
use crate::domain::{Error, LoginCredentials, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;

const AUTHENTICATE_SQL: &str = "SELECT id FROM profiles \
     WHERE email = $1 AND password_hash = crypt($2, password_hash)";

#[derive(QueryableByName)]
struct ProfileId {
    #[diesel(sql_type = SqlUuid)]
    id: Uuid,
}

/// Authenticates travellers against the `profiles` table.
#[derive(Clone)]
pub struct DieselLoginService {
    pool: DbPool,
}

impl DieselLoginService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn login_failure(error: BackendError) -> Error {
    warn!(%error, "login lookup failed");
    match error {
        BackendError::Connection { .. } => {
            Error::service_unavailable("login failed: backend unavailable")
        }
        BackendError::Query { .. } | BackendError::Constraint { .. } => {
            Error::internal("login failed")
        }
    }
}

#[async_trait]
impl LoginService for DieselLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|error| login_failure(map_pool_error(error)))?;

        let row: Option<ProfileId> = sql_query(AUTHENTICATE_SQL)
            .bind::<Text, _>(credentials.email())
            .bind::<Text, _>(credentials.password())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|error| login_failure(map_diesel_error(error)))?;

        row.map(|profile| UserId::from_uuid(profile.id))
            .ok_or_else(|| Error::unauthorized("invalid credentials"))
    }
}
