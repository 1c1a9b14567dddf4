//! Itinerary resource.

use std::sync::Arc;

use serde_json::json;

use crate::domain::outcome::{Outcome, err_with_details};
use crate::domain::ports::ItineraryRepository;
use crate::domain::validation::{
    FieldName, optional_text, optional_timestamp, require_id, require_text,
};
use crate::domain::{NewPlace, Place, PlaceDraft};

use super::backend_failure;

const TRIP_ID: FieldName = FieldName::new("tripId");
const NAME: FieldName = FieldName::new("name");
const STARTS_AT: FieldName = FieldName::new("startsAt");

/// Itinerary operations over an [`ItineraryRepository`].
#[derive(Clone)]
pub struct ItineraryResource {
    repo: Arc<dyn ItineraryRepository>,
}

impl ItineraryResource {
    /// Wrap an itinerary repository.
    pub fn new(repo: Arc<dyn ItineraryRepository>) -> Self {
        Self { repo }
    }

    /// Places of a trip; an empty itinerary is an empty list.
    pub async fn list_for_trip(&self, trip_id: &str) -> Outcome<Vec<Place>> {
        let trip_id = require_id(TRIP_ID, Some(trip_id))?;
        self.repo
            .list_for_trip(trip_id)
            .await
            .map_err(backend_failure("list itinerary"))
    }

    /// Append a place to a day of the trip. The day defaults to the first one.
    pub async fn add_place(&self, trip_id: &str, draft: PlaceDraft) -> Outcome<Place> {
        let trip_id = require_id(TRIP_ID, Some(trip_id))?;
        let name = require_text(NAME, draft.name.as_deref())?;
        let day_index = draft.day_index.unwrap_or(0);
        if day_index < 0 {
            return err_with_details(
                "dayIndex must not be negative",
                json!({ "field": "dayIndex", "code": "invalid_range" }),
            );
        }
        let place = NewPlace {
            trip_id,
            name,
            day_index,
            starts_at: optional_timestamp(STARTS_AT, draft.starts_at.as_deref())?,
            notes: optional_text(draft.notes.as_deref()),
        };
        self.repo
            .append(&place)
            .await
            .map_err(backend_failure("add itinerary place"))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{
        BackendError, FIXTURE_TRIP_ID, FixtureItineraryRepository, MockItineraryRepository,
    };
    use rstest::rstest;

    #[rstest]
    #[case(PlaceDraft { name: None, ..PlaceDraft::default() }, "name is required")]
    #[case(
        PlaceDraft { name: Some("Belém".to_owned()), day_index: Some(-1), ..PlaceDraft::default() },
        "dayIndex must not be negative"
    )]
    #[case(
        PlaceDraft {
            name: Some("Belém".to_owned()),
            starts_at: Some("noon".to_owned()),
            ..PlaceDraft::default()
        },
        "startsAt must be an RFC 3339 timestamp"
    )]
    #[tokio::test]
    async fn add_place_validates_before_appending(#[case] draft: PlaceDraft, #[case] message: &str) {
        let mut repo = MockItineraryRepository::new();
        repo.expect_append().never();

        let error = ItineraryResource::new(Arc::new(repo))
            .add_place(&FIXTURE_TRIP_ID.to_string(), draft)
            .await
            .expect_err("invalid place");
        assert_eq!(error.message(), message);
    }

    #[rstest]
    #[tokio::test]
    async fn empty_itinerary_is_an_empty_list() {
        let places = ItineraryResource::new(Arc::new(FixtureItineraryRepository))
            .list_for_trip(&uuid::Uuid::nil().to_string())
            .await
            .expect("empty list");
        assert!(places.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn query_failures_do_not_leak_backend_text() {
        let mut repo = MockItineraryRepository::new();
        repo.expect_list_for_trip()
            .returning(|_| Err(BackendError::query("column position does not exist")));

        let error = ItineraryResource::new(Arc::new(repo))
            .list_for_trip(&FIXTURE_TRIP_ID.to_string())
            .await
            .expect_err("query failure");
        assert_eq!(error.message(), "list itinerary failed");
    }
}
