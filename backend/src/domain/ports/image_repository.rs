//! Port for trip image records.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewTripImage, TripImage};

use super::BackendError;
use super::fixtures::{FIXTURE_TRIP_ID, fixture_id, fixture_timestamp, fixture_user};

/// Image metadata storage; the bytes live in object storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Images of a trip, newest first.
    async fn list_for_trip(&self, trip_id: Uuid) -> Result<Vec<TripImage>, BackendError>;

    /// Record an uploaded image.
    async fn insert(&self, image: &NewTripImage) -> Result<TripImage, BackendError>;
}

/// Fixture implementation with one image on the fixture trip.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureImageRepository;

#[async_trait]
impl ImageRepository for FixtureImageRepository {
    async fn list_for_trip(&self, trip_id: Uuid) -> Result<Vec<TripImage>, BackendError> {
        if trip_id != FIXTURE_TRIP_ID {
            return Ok(Vec::new());
        }
        Ok(vec![TripImage {
            id: fixture_id("image:beach"),
            trip_id,
            storage_path: format!("trips/{trip_id}/beach.jpg"),
            caption: Some("Praia da Rainha".to_owned()),
            uploaded_by: fixture_user(),
            created_at: fixture_timestamp(),
        }])
    }

    async fn insert(&self, image: &NewTripImage) -> Result<TripImage, BackendError> {
        Ok(TripImage {
            id: fixture_id(&image.storage_path),
            trip_id: image.trip_id,
            storage_path: image.storage_path.clone(),
            caption: image.caption.clone(),
            uploaded_by: image.uploaded_by.clone(),
            created_at: fixture_timestamp(),
        })
    }
}
