//! Trips resource.

use std::sync::Arc;

use crate::domain::outcome::{Outcome, err};
use crate::domain::ports::TripRepository;
use crate::domain::validation::{
    FieldName, optional_date, optional_text, ordered_dates, require_id, require_text,
};
use crate::domain::{NewTrip, Trip, TripChanges, TripDraft, UserId};

use super::{backend_failure, not_found};

const TRIP_ID: FieldName = FieldName::new("tripId");
const GROUP_ID: FieldName = FieldName::new("groupId");
const NAME: FieldName = FieldName::new("name");
const START_DATE: FieldName = FieldName::new("startDate");
const END_DATE: FieldName = FieldName::new("endDate");

/// Trip operations over a [`TripRepository`].
#[derive(Clone)]
pub struct TripsResource {
    repo: Arc<dyn TripRepository>,
}

impl TripsResource {
    /// Wrap a trip repository.
    pub fn new(repo: Arc<dyn TripRepository>) -> Self {
        Self { repo }
    }

    /// Trips visible to `user` through their group memberships.
    pub async fn list_for_user(&self, user: &UserId) -> Outcome<Vec<Trip>> {
        self.repo
            .list_for_member(user)
            .await
            .map_err(backend_failure("list trips"))
    }

    /// A single trip.
    pub async fn get(&self, trip_id: &str) -> Outcome<Trip> {
        let trip_id = require_id(TRIP_ID, Some(trip_id))?;
        self.repo
            .find(trip_id)
            .await
            .map_err(backend_failure("load trip"))?
            .ok_or_else(|| not_found("trip"))
    }

    /// Create a trip in the draft's group, owned by `user`.
    pub async fn create(&self, user: &UserId, draft: TripDraft) -> Outcome<Trip> {
        let group_id = require_id(GROUP_ID, draft.group_id.as_deref())?;
        let name = require_text(NAME, draft.name.as_deref())?;
        let start_date = optional_date(START_DATE, draft.start_date.as_deref())?;
        let end_date = optional_date(END_DATE, draft.end_date.as_deref())?;
        ordered_dates(END_DATE, start_date, end_date)?;

        let trip = NewTrip {
            group_id,
            name,
            destination: optional_text(draft.destination.as_deref()),
            start_date,
            end_date,
            created_by: user.clone(),
        };
        self.repo
            .insert(&trip)
            .await
            .map_err(backend_failure("create trip"))
    }

    /// Change a trip's details. `groupId` in the draft is ignored; trips
    /// never move between groups.
    pub async fn update(&self, trip_id: &str, draft: TripDraft) -> Outcome<Trip> {
        let trip_id = require_id(TRIP_ID, Some(trip_id))?;
        let name = match draft.name.as_deref() {
            Some(raw) => Some(require_text(NAME, Some(raw))?),
            None => None,
        };
        let start_date = optional_date(START_DATE, draft.start_date.as_deref())?;
        let end_date = optional_date(END_DATE, draft.end_date.as_deref())?;
        ordered_dates(END_DATE, start_date, end_date)?;

        let changes = TripChanges {
            name,
            destination: optional_text(draft.destination.as_deref()),
            start_date,
            end_date,
        };
        if changes.is_empty() {
            return err("no changes supplied");
        }
        self.repo
            .update(trip_id, &changes)
            .await
            .map_err(backend_failure("update trip"))?
            .ok_or_else(|| not_found("trip"))
    }
}
