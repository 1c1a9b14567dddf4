//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::cookie::{Key, SameSite};
use tripboard::domain::Catalog;
use tripboard::outbound::persistence::DbPool;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Connection pools for the managed backend.
///
/// `service` serves traveller-facing repositories; `admin` connects as the
/// service role and only backs the admin procedure port.
#[derive(Clone)]
pub struct BackendPools {
    pub service: DbPool,
    pub admin: DbPool,
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) pools: Option<BackendPools>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Server configuration answering from fixture ports until pools are
    /// attached.
    #[must_use]
    pub fn new(
        key: Key,
        cookie_secure: bool,
        same_site: SameSite,
        bind_addr: SocketAddr,
        catalog: Arc<Catalog>,
    ) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            catalog,
            pools: None,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Attach the backend pools so Diesel adapters replace the fixtures.
    #[must_use]
    pub fn with_pools(mut self, pools: BackendPools) -> Self {
        self.pools = Some(pools);
        self
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
