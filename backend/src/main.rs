//! Backend entry-point: resolves configuration, prepares the database and
//! serves the REST API.

mod server;

use std::env;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{BackendPools, ServerConfig, create_server};
use tripboard::config::{AppConfig, BuildMode, ServerSettings};
use tripboard::inbound::http::health::HealthState;
use tripboard::outbound::persistence::{DbPool, PoolConfig, run_migrations};

async fn connect(url: &str, settings: &ServerSettings) -> std::io::Result<DbPool> {
    let config = PoolConfig::new(url)
        .with_max_size(settings.pool_max_size())
        .with_min_idle(settings.pool_min_idle());
    DbPool::new(config)
        .await
        .map_err(|error| std::io::Error::other(error.to_string()))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let AppConfig {
        backend,
        session,
        server: settings,
        catalog,
    } = AppConfig::load(&DefaultEnv::new(), BuildMode::from_debug_assertions(), env::args_os())?;

    if settings.run_migrations {
        run_migrations(backend.service_url())
            .await
            .map_err(|error| std::io::Error::other(error.to_string()))?;
    }

    let pools = BackendPools {
        service: connect(backend.service_url(), &settings).await?,
        admin: connect(backend.admin_url(), &settings).await?,
    };

    let bind_addr = settings.bind_addr()?;
    let config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        bind_addr,
        catalog,
    )
    .with_pools(pools);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::prometheus_middleware());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    health_state.mark_ready();
    info!(%bind_addr, "listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result
}
