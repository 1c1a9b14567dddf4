//! Activities resource.

use std::sync::Arc;

use crate::domain::outcome::Outcome;
use crate::domain::ports::ActivityRepository;
use crate::domain::validation::{
    FieldName, optional_timestamp, require_id, require_label, require_text,
};
use crate::domain::{Activity, ActivityDraft, Catalog, NewActivity, UserId};

use super::backend_failure;

const TRIP_ID: FieldName = FieldName::new("tripId");
const TITLE: FieldName = FieldName::new("title");
const CATEGORY: FieldName = FieldName::new("category");
const SCHEDULED_AT: FieldName = FieldName::new("scheduledAt");

/// Activity operations over an [`ActivityRepository`].
#[derive(Clone)]
pub struct ActivitiesResource {
    repo: Arc<dyn ActivityRepository>,
    catalog: Arc<Catalog>,
}

impl ActivitiesResource {
    /// Wrap an activity repository; categories come from `catalog`.
    pub fn new(repo: Arc<dyn ActivityRepository>, catalog: Arc<Catalog>) -> Self {
        Self { repo, catalog }
    }

    /// Activities of a trip.
    pub async fn list_for_trip(&self, trip_id: &str) -> Outcome<Vec<Activity>> {
        let trip_id = require_id(TRIP_ID, Some(trip_id))?;
        self.repo
            .list_for_trip(trip_id)
            .await
            .map_err(backend_failure("list activities"))
    }

    /// Propose an activity for the draft's trip.
    pub async fn create(&self, user: &UserId, draft: ActivityDraft) -> Outcome<Activity> {
        let activity = NewActivity {
            trip_id: require_id(TRIP_ID, draft.trip_id.as_deref())?,
            title: require_text(TITLE, draft.title.as_deref())?,
            category: require_label(
                CATEGORY,
                draft.category.as_deref(),
                &self.catalog.activity_categories,
            )?,
            scheduled_at: optional_timestamp(SCHEDULED_AT, draft.scheduled_at.as_deref())?,
            created_by: user.clone(),
        };
        self.repo
            .insert(&activity)
            .await
            .map_err(backend_failure("create activity"))
    }
}
