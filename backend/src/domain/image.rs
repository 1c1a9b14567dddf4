//! Photos attached to a trip.
//!
//! Binary uploads go straight to object storage; the backend only records
//! where each image lives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::UserId;

/// A registered trip image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripImage {
    pub id: Uuid,
    pub trip_id: Uuid,
    #[schema(example = "trips/3fa85f64/beach.jpg")]
    pub storage_path: String,
    pub caption: Option<String>,
    #[schema(value_type = String)]
    pub uploaded_by: UserId,
    pub created_at: DateTime<Utc>,
}

/// Client payload for registering an uploaded image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageDraft {
    pub trip_id: Option<String>,
    pub storage_path: Option<String>,
    pub caption: Option<String>,
}

/// Validated input for recording an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTripImage {
    pub trip_id: Uuid,
    pub storage_path: String,
    pub caption: Option<String>,
    pub uploaded_by: UserId,
}
