//! Port for trip activities.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Activity, NewActivity};

use super::BackendError;
use super::fixtures::{FIXTURE_TRIP_ID, fixture_id, fixture_timestamp, fixture_user};

/// Activity storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Activities of a trip ordered by schedule, unscheduled last.
    async fn list_for_trip(&self, trip_id: Uuid) -> Result<Vec<Activity>, BackendError>;

    /// Insert an activity and return the stored row.
    async fn insert(&self, activity: &NewActivity) -> Result<Activity, BackendError>;
}

/// Fixture implementation with one activity on the fixture trip.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureActivityRepository;

#[async_trait]
impl ActivityRepository for FixtureActivityRepository {
    async fn list_for_trip(&self, trip_id: Uuid) -> Result<Vec<Activity>, BackendError> {
        if trip_id != FIXTURE_TRIP_ID {
            return Ok(Vec::new());
        }
        Ok(vec![Activity {
            id: fixture_id("activity:surf"),
            trip_id,
            title: "Surf lesson".to_owned(),
            category: "outdoors".to_owned(),
            scheduled_at: None,
            created_by: fixture_user(),
            created_at: fixture_timestamp(),
        }])
    }

    async fn insert(&self, activity: &NewActivity) -> Result<Activity, BackendError> {
        Ok(Activity {
            id: fixture_id(&format!("activity:{}", activity.title)),
            trip_id: activity.trip_id,
            title: activity.title.clone(),
            category: activity.category.clone(),
            scheduled_at: activity.scheduled_at,
            created_by: activity.created_by.clone(),
            created_at: fixture_timestamp(),
        })
    }
}
