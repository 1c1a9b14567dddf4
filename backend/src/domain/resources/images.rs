//! Trip images resource.
//!
//! Clients upload bytes to object storage themselves and then register the
//! stored path here.

use std::sync::Arc;

use serde_json::json;

use crate::domain::outcome::{Outcome, err_with_details};
use crate::domain::ports::ImageRepository;
use crate::domain::validation::{FieldName, optional_text, require_id, require_text};
use crate::domain::{ImageDraft, NewTripImage, TripImage, UserId};

use super::backend_failure;

const TRIP_ID: FieldName = FieldName::new("tripId");
const STORAGE_PATH: FieldName = FieldName::new("storagePath");

/// Image operations over an [`ImageRepository`].
#[derive(Clone)]
pub struct ImagesResource {
    repo: Arc<dyn ImageRepository>,
}

impl ImagesResource {
    /// Wrap an image repository.
    pub fn new(repo: Arc<dyn ImageRepository>) -> Self {
        Self { repo }
    }

    /// Images of a trip.
    pub async fn list_for_trip(&self, trip_id: &str) -> Outcome<Vec<TripImage>> {
        let trip_id = require_id(TRIP_ID, Some(trip_id))?;
        self.repo
            .list_for_trip(trip_id)
            .await
            .map_err(backend_failure("list trip images"))
    }

    /// Record an uploaded image against its trip.
    ///
    /// The storage path must be relative and may not climb out of the bucket.
    pub async fn register(&self, user: &UserId, draft: ImageDraft) -> Outcome<TripImage> {
        let trip_id = require_id(TRIP_ID, draft.trip_id.as_deref())?;
        let storage_path = require_text(STORAGE_PATH, draft.storage_path.as_deref())?;
        if storage_path.starts_with('/') || storage_path.split('/').any(|part| part == "..") {
            return err_with_details(
                "storagePath must be a relative object path",
                json!({ "field": STORAGE_PATH.as_str(), "code": "invalid_path" }),
            );
        }
        let image = NewTripImage {
            trip_id,
            storage_path,
            caption: optional_text(draft.caption.as_deref()),
            uploaded_by: user.clone(),
        };
        self.repo
            .insert(&image)
            .await
            .map_err(backend_failure("register trip image"))
    }
}
