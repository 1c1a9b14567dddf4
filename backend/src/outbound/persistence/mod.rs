//! PostgreSQL adapters for the domain ports, built on Diesel.
//!
//! Adapters are thin: they translate between the row structs in `models`
//! and domain entities, and map every failure into
//! [`BackendError`](crate::domain::ports::BackendError). Connections come
//! from a `bb8` pool through `diesel-async`.
//!
//! Two pools exist at runtime. Traveller-facing repositories share the
//! service pool; [`DieselBackendRpc`] gets the admin pool, connected as the
//! privileged service role.
//!
//! # Example
//!
//! ```no_run
//! use tripboard::outbound::persistence::{DbPool, DieselTripRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/tripboard")).await?;
//! let trips = DieselTripRepository::new(pool);
//! # let _ = trips;
//! # Ok(())
//! # }
//! ```

mod diesel_activity_repository;
mod diesel_backend_rpc;
mod diesel_group_repository;
mod diesel_image_repository;
mod diesel_itinerary_repository;
mod diesel_login_service;
mod diesel_survey_repository;
mod diesel_task_repository;
mod diesel_trip_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_activity_repository::DieselActivityRepository;
pub use diesel_backend_rpc::DieselBackendRpc;
pub use diesel_group_repository::DieselGroupRepository;
pub use diesel_image_repository::DieselImageRepository;
pub use diesel_itinerary_repository::DieselItineraryRepository;
pub use diesel_login_service::DieselLoginService;
pub use diesel_survey_repository::DieselSurveyRepository;
pub use diesel_task_repository::DieselTaskRepository;
pub use diesel_trip_repository::DieselTripRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
