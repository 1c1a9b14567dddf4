//! Builders for the HTTP state from the configured ports.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use tripboard::inbound::http::state::{HttpState, HttpStatePorts};
use tripboard::outbound::persistence::{
    DieselActivityRepository, DieselBackendRpc, DieselGroupRepository, DieselImageRepository,
    DieselItineraryRepository, DieselLoginService, DieselSurveyRepository, DieselTaskRepository,
    DieselTripRepository,
};

use super::{BackendPools, ServerConfig};

/// Diesel adapters over the service pool, with the procedure port on the
/// admin pool.
fn diesel_ports(pools: &BackendPools) -> HttpStatePorts {
    let service = &pools.service;
    HttpStatePorts {
        login: Arc::new(DieselLoginService::new(service.clone())),
        trips: Arc::new(DieselTripRepository::new(service.clone())),
        groups: Arc::new(DieselGroupRepository::new(service.clone())),
        tasks: Arc::new(DieselTaskRepository::new(service.clone())),
        itinerary: Arc::new(DieselItineraryRepository::new(service.clone())),
        activities: Arc::new(DieselActivityRepository::new(service.clone())),
        images: Arc::new(DieselImageRepository::new(service.clone())),
        surveys: Arc::new(DieselSurveyRepository::new(service.clone())),
        rpc: Arc::new(DieselBackendRpc::new(pools.admin.clone())),
    }
}

/// Ports for `config`: Diesel adapters when pools are attached, fixtures
/// otherwise.
pub(crate) fn build_ports(config: &ServerConfig) -> HttpStatePorts {
    match &config.pools {
        Some(pools) => diesel_ports(pools),
        None => HttpStatePorts::fixtures(),
    }
}

/// Shared handler state built once per server.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let ports = build_ports(config);
    web::Data::new(HttpState::new(
        ports,
        config.catalog.clone(),
        Arc::new(DefaultClock),
    ))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::cookie::{Key, SameSite};
    use rstest::rstest;
    use tripboard::domain::ports::{FIXTURE_TRIP_ID, FIXTURE_USER_ID};
    use tripboard::domain::{Catalog, UserId};

    fn fixture_config() -> ServerConfig {
        ServerConfig::new(
            Key::generate(),
            false,
            SameSite::Lax,
            "127.0.0.1:0".parse().expect("socket address"),
            Arc::new(Catalog::default()),
        )
    }

    #[rstest]
    #[actix_rt::test]
    async fn state_without_pools_answers_from_fixtures() {
        let state = build_http_state(&fixture_config());
        let user = UserId::from_uuid(FIXTURE_USER_ID);
        let trips = state.trips.list_for_user(&user).await.expect("fixture trips");
        assert!(trips.iter().any(|trip| trip.id == FIXTURE_TRIP_ID));
    }

    #[rstest]
    fn state_shares_the_configured_catalog() {
        let config = fixture_config();
        let state = build_http_state(&config);
        assert!(Arc::ptr_eq(&state.catalog, &config.catalog));
    }
}
