//! Admin resource: read-only overviews computed by backend procedures.

use std::sync::Arc;

use serde_json::{Value, json};

use crate::domain::outcome::Outcome;
use crate::domain::ports::BackendRpc;
use crate::domain::Catalog;

use super::backend_failure;

/// Admin operations over a privileged [`BackendRpc`].
#[derive(Clone)]
pub struct AdminResource {
    rpc: Arc<dyn BackendRpc>,
    catalog: Arc<Catalog>,
}

impl AdminResource {
    /// Wrap the RPC port; procedure names come from `catalog`.
    pub fn new(rpc: Arc<dyn BackendRpc>, catalog: Arc<Catalog>) -> Self {
        Self { rpc, catalog }
    }

    /// Per-trip overview rows as returned by the overview procedure.
    pub async fn trip_overview(&self) -> Outcome<Value> {
        self.rpc
            .call(&self.catalog.trip_overview_rpc, &json!({}))
            .await
            .map_err(backend_failure("load trip overview"))
    }

    /// Message every retired admin endpoint answers with.
    pub fn retired_message(&self) -> &str {
        &self.catalog.retired_endpoint_message
    }
}
