//! Shared HTTP adapter state.
//!
//! Handlers receive [`HttpState`] through `web::Data` and only ever talk to
//! the resource modules and the login port, so they stay testable without
//! I/O.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::domain::Catalog;
use crate::domain::ports::{
    ActivityRepository, BackendRpc, FixtureActivityRepository, FixtureBackendRpc,
    FixtureGroupRepository, FixtureImageRepository, FixtureItineraryRepository,
    FixtureLoginService, FixtureSurveyRepository, FixtureTaskRepository, FixtureTripRepository,
    GroupRepository, ImageRepository, ItineraryRepository, LoginService, SurveyRepository,
    TaskRepository, TripRepository,
};
use crate::domain::resources::{
    ActivitiesResource, AdminResource, GroupsResource, ImagesResource, ItineraryResource,
    SurveysResource, TasksResource, TripsResource,
};

/// Parameter object bundling every port implementation.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub login: Arc<dyn LoginService>,
    pub trips: Arc<dyn TripRepository>,
    pub groups: Arc<dyn GroupRepository>,
    pub tasks: Arc<dyn TaskRepository>,
    pub itinerary: Arc<dyn ItineraryRepository>,
    pub activities: Arc<dyn ActivityRepository>,
    pub images: Arc<dyn ImageRepository>,
    pub surveys: Arc<dyn SurveyRepository>,
    pub rpc: Arc<dyn BackendRpc>,
}

impl HttpStatePorts {
    /// Fixture ports answering from in-memory data.
    pub fn fixtures() -> Self {
        Self {
            login: Arc::new(FixtureLoginService),
            trips: Arc::new(FixtureTripRepository),
            groups: Arc::new(FixtureGroupRepository),
            tasks: Arc::new(FixtureTaskRepository),
            itinerary: Arc::new(FixtureItineraryRepository),
            activities: Arc::new(FixtureActivityRepository),
            images: Arc::new(FixtureImageRepository),
            surveys: Arc::new(FixtureSurveyRepository),
            rpc: Arc::new(FixtureBackendRpc),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub trips: TripsResource,
    pub groups: GroupsResource,
    pub tasks: TasksResource,
    pub itinerary: ItineraryResource,
    pub activities: ActivitiesResource,
    pub images: ImagesResource,
    pub surveys: SurveysResource,
    pub admin: AdminResource,
    pub catalog: Arc<Catalog>,
}

impl HttpState {
    /// Wrap each port in its resource module.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use tripboard::domain::Catalog;
    /// use tripboard::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(
    ///     HttpStatePorts::fixtures(),
    ///     Arc::new(Catalog::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// assert_eq!(state.catalog.trip_overview_rpc, "admin_trip_overview");
    /// ```
    pub fn new(ports: HttpStatePorts, catalog: Arc<Catalog>, clock: Arc<dyn Clock>) -> Self {
        let HttpStatePorts {
            login,
            trips,
            groups,
            tasks,
            itinerary,
            activities,
            images,
            surveys,
            rpc,
        } = ports;
        Self {
            login,
            trips: TripsResource::new(trips),
            groups: GroupsResource::new(groups),
            tasks: TasksResource::new(tasks, catalog.clone()),
            itinerary: ItineraryResource::new(itinerary),
            activities: ActivitiesResource::new(activities, catalog.clone()),
            images: ImagesResource::new(images),
            surveys: SurveysResource::new(surveys, clock),
            admin: AdminResource::new(rpc, catalog.clone()),
            catalog,
        }
    }

    /// State wired to fixture ports, the default catalog and the system clock.
    pub fn fixtures() -> Self {
        Self::new(
            HttpStatePorts::fixtures(),
            Arc::new(Catalog::default()),
            Arc::new(DefaultClock),
        )
    }
}
