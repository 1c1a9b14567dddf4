//! Port for itinerary places.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewPlace, Place};

use super::BackendError;
use super::fixtures::{FIXTURE_TRIP_ID, fixture_id};

/// Itinerary storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItineraryRepository: Send + Sync {
    /// Places of a trip ordered by day then position.
    async fn list_for_trip(&self, trip_id: Uuid) -> Result<Vec<Place>, BackendError>;

    /// Append a place after the last one on its day.
    async fn append(&self, place: &NewPlace) -> Result<Place, BackendError>;
}

/// Fixture implementation with one place on the first day of the fixture trip.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureItineraryRepository;

#[async_trait]
impl ItineraryRepository for FixtureItineraryRepository {
    async fn list_for_trip(&self, trip_id: Uuid) -> Result<Vec<Place>, BackendError> {
        if trip_id != FIXTURE_TRIP_ID {
            return Ok(Vec::new());
        }
        Ok(vec![Place {
            id: fixture_id("place:time-out-market"),
            trip_id,
            name: "Time Out Market".to_owned(),
            day_index: 0,
            starts_at: None,
            notes: None,
            position: 0,
        }])
    }

    async fn append(&self, place: &NewPlace) -> Result<Place, BackendError> {
        let position = if place.trip_id == FIXTURE_TRIP_ID && place.day_index == 0 {
            1
        } else {
            0
        };
        Ok(Place {
            id: fixture_id(&format!("place:{}", place.name)),
            trip_id: place.trip_id,
            name: place.name.clone(),
            day_index: place.day_index,
            starts_at: place.starts_at,
            notes: place.notes.clone(),
            position,
        })
    }
}
