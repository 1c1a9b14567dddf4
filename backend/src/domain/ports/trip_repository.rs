//! Port for trip persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewTrip, Trip, TripChanges, UserId};

use super::BackendError;
use super::fixtures::{
    FIXTURE_GROUP_ID, FIXTURE_TRIP_ID, fixture_date, fixture_timestamp, fixture_user,
};

/// Trip storage and lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Trips belonging to any group `user` is a member of, newest first.
    async fn list_for_member(&self, user: &UserId) -> Result<Vec<Trip>, BackendError>;

    /// Find a trip by id.
    async fn find(&self, trip_id: Uuid) -> Result<Option<Trip>, BackendError>;

    /// Insert a trip and return the stored row.
    async fn insert(&self, trip: &NewTrip) -> Result<Trip, BackendError>;

    /// Apply `changes` and return the updated row, or `None` when the trip
    /// does not exist.
    async fn update(
        &self,
        trip_id: Uuid,
        changes: &TripChanges,
    ) -> Result<Option<Trip>, BackendError>;
}

/// Fixture implementation serving a single known trip.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTripRepository;

pub(crate) fn fixture_trip() -> Trip {
    Trip {
        id: FIXTURE_TRIP_ID,
        group_id: FIXTURE_GROUP_ID,
        name: "Lisbon long weekend".to_owned(),
        destination: Some("Lisbon".to_owned()),
        start_date: fixture_date(5),
        end_date: fixture_date(8),
        created_by: fixture_user(),
        created_at: fixture_timestamp(),
        updated_at: fixture_timestamp(),
    }
}

#[async_trait]
impl TripRepository for FixtureTripRepository {
    async fn list_for_member(&self, _user: &UserId) -> Result<Vec<Trip>, BackendError> {
        Ok(vec![fixture_trip()])
    }

    async fn find(&self, trip_id: Uuid) -> Result<Option<Trip>, BackendError> {
        Ok((trip_id == FIXTURE_TRIP_ID).then(fixture_trip))
    }

    async fn insert(&self, trip: &NewTrip) -> Result<Trip, BackendError> {
        Ok(Trip {
            id: FIXTURE_TRIP_ID,
            group_id: trip.group_id,
            name: trip.name.clone(),
            destination: trip.destination.clone(),
            start_date: trip.start_date,
            end_date: trip.end_date,
            created_by: trip.created_by.clone(),
            created_at: fixture_timestamp(),
            updated_at: fixture_timestamp(),
        })
    }

    async fn update(
        &self,
        trip_id: Uuid,
        changes: &TripChanges,
    ) -> Result<Option<Trip>, BackendError> {
        if trip_id != FIXTURE_TRIP_ID {
            return Ok(None);
        }
        let mut trip = fixture_trip();
        if let Some(name) = &changes.name {
            trip.name.clone_from(name);
        }
        if let Some(destination) = &changes.destination {
            trip.destination = Some(destination.clone());
        }
        trip.start_date = changes.start_date.or(trip.start_date);
        trip.end_date = changes.end_date.or(trip.end_date);
        Ok(Some(trip))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_find_only_knows_its_trip() {
        let repo = FixtureTripRepository;
        let known = repo.find(FIXTURE_TRIP_ID).await.expect("fixture lookup");
        let unknown = repo.find(Uuid::nil()).await.expect("fixture lookup");
        assert!(known.is_some());
        assert!(unknown.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_update_applies_changes() {
        let changes = TripChanges {
            name: Some("Porto instead".to_owned()),
            ..TripChanges::default()
        };
        let updated = FixtureTripRepository
            .update(FIXTURE_TRIP_ID, &changes)
            .await
            .expect("fixture update")
            .expect("known trip");
        assert_eq!(updated.name, "Porto instead");
        assert_eq!(updated.destination.as_deref(), Some("Lisbon"));
    }
}
