//! Day-by-day itinerary places.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A place on a trip's itinerary.
///
/// `position` orders places within the same `day_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: Uuid,
    pub trip_id: Uuid,
    #[schema(example = "Time Out Market")]
    pub name: String,
    pub day_index: i32,
    pub starts_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub position: i32,
}

/// Client payload for adding a place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDraft {
    pub name: Option<String>,
    pub day_index: Option<i32>,
    #[schema(example = "2026-06-01T12:30:00Z")]
    pub starts_at: Option<String>,
    pub notes: Option<String>,
}

/// Validated input for appending a place; the adapter assigns `position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlace {
    pub trip_id: Uuid,
    pub name: String,
    pub day_index: i32,
    pub starts_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}
