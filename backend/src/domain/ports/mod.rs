//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Each repository port has a `Fixture*` implementation backed by the
//! fixture constants exported here so the HTTP layer can run without a database.

mod macros;
pub(crate) use macros::define_port_error;

mod activity_repository;
mod backend_error;
mod backend_rpc;
mod fixtures;
mod group_repository;
mod image_repository;
mod itinerary_repository;
mod login_service;
mod survey_repository;
mod task_repository;
mod trip_repository;

#[cfg(test)]
pub use activity_repository::MockActivityRepository;
pub use activity_repository::{ActivityRepository, FixtureActivityRepository};
pub use backend_error::BackendError;
#[cfg(test)]
pub use backend_rpc::MockBackendRpc;
pub use backend_rpc::{BackendRpc, FixtureBackendRpc};
pub use fixtures::{
    FIXTURE_GROUP_ID, FIXTURE_SURVEY_ID, FIXTURE_TASK_ID, FIXTURE_TRIP_ID, FIXTURE_USER_ID,
};
#[cfg(test)]
pub use group_repository::MockGroupRepository;
pub use group_repository::{FixtureGroupRepository, GroupRepository};
#[cfg(test)]
pub use image_repository::MockImageRepository;
pub use image_repository::{FixtureImageRepository, ImageRepository};
#[cfg(test)]
pub use itinerary_repository::MockItineraryRepository;
pub use itinerary_repository::{FixtureItineraryRepository, ItineraryRepository};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{FIXTURE_EMAIL, FIXTURE_PASSWORD, FixtureLoginService, LoginService};
#[cfg(test)]
pub use survey_repository::MockSurveyRepository;
pub use survey_repository::{FixtureSurveyRepository, SurveyRepository};
#[cfg(test)]
pub use task_repository::MockTaskRepository;
pub use task_repository::{FixtureTaskRepository, TaskRepository};
#[cfg(test)]
pub use trip_repository::MockTripRepository;
pub use trip_repository::{FixtureTripRepository, TripRepository};
