//! Stored-procedure calls over the privileged admin pool.
//!
//! Procedures take one `jsonb` argument and return `jsonb`. Names are
//! interpolated into SQL, so only lower-case identifiers are accepted.

use async_trait::async_trait;
use diesel::sql_query;
use diesel::sql_types::Jsonb;
use diesel::QueryableByName;
use diesel_async::RunQueryDsl;
use serde_json::Value;

use crate::domain::ports::{BackendError, BackendRpc};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;

#[derive(QueryableByName)]
struct RpcResult {
    #[diesel(sql_type = Jsonb)]
    result: Value,
}

/// [`BackendRpc`] adapter; build it with the admin pool.
#[derive(Clone)]
pub struct DieselBackendRpc {
    pool: DbPool,
}

impl DieselBackendRpc {
    pub fn new(admin_pool: DbPool) -> Self {
        Self { pool: admin_pool }
    }
}

fn is_procedure_name(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = chars
        .next()
        .is_some_and(|first| first.is_ascii_lowercase() || first == '_');
    starts_well
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && name.len() <= 63
}

#[async_trait]
impl BackendRpc for DieselBackendRpc {
    async fn call(&self, name: &str, args: &Value) -> Result<Value, BackendError> {
        if !is_procedure_name(name) {
            return Err(BackendError::query(format!("invalid procedure name {name:?}")));
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: RpcResult = sql_query(format!("SELECT {name}($1::jsonb) AS result"))
            .bind::<Jsonb, _>(args)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.result)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("admin_trip_overview", true)]
    #[case("_internal2", true)]
    #[case("", false)]
    #[case("2fast", false)]
    #[case("Admin", false)]
    #[case("overview(); drop table trips; --", false)]
    #[case("public.admin_trip_overview", false)]
    fn only_plain_identifiers_are_callable(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_procedure_name(name), expected);
    }
}
