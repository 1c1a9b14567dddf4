//! Port for named backend procedures.
//!
//! Admin views are computed by stored procedures that take a JSON argument
//! object and return a JSON document; this port hides how they are invoked.

use async_trait::async_trait;
use serde_json::{Value, json};

use super::BackendError;
use super::fixtures::{FIXTURE_GROUP_ID, FIXTURE_TRIP_ID};

/// Invoke a named backend procedure with the privileged role.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendRpc: Send + Sync {
    /// Call procedure `name` with `args` and return its JSON result.
    async fn call(&self, name: &str, args: &Value) -> Result<Value, BackendError>;
}

/// Fixture implementation answering every procedure with a one-row overview.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBackendRpc;

#[async_trait]
impl BackendRpc for FixtureBackendRpc {
    async fn call(&self, _name: &str, _args: &Value) -> Result<Value, BackendError> {
        Ok(json!([{
            "tripId": FIXTURE_TRIP_ID,
            "groupId": FIXTURE_GROUP_ID,
            "name": "Lisbon long weekend",
            "memberCount": 1,
            "openTaskCount": 1,
        }]))
    }
}
