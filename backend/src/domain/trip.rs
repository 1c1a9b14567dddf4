//! Trips planned by a group.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::UserId;

/// A trip row as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: Uuid,
    pub group_id: Uuid,
    #[schema(example = "Lisbon long weekend")]
    pub name: String,
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[schema(value_type = String)]
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client payload for creating or updating a trip.
///
/// Every field is optional so the trips resource decides what is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripDraft {
    pub group_id: Option<String>,
    pub name: Option<String>,
    pub destination: Option<String>,
    #[schema(example = "2026-06-01")]
    pub start_date: Option<String>,
    #[schema(example = "2026-06-04")]
    pub end_date: Option<String>,
}

/// Validated input for inserting a trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrip {
    pub group_id: Uuid,
    pub name: String,
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_by: UserId,
}

/// Validated partial update; `None` leaves a column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripChanges {
    pub name: Option<String>,
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TripChanges {
    /// Whether the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.destination.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}
