//! Activities proposed for a trip.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::UserId;

/// An activity row as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: Uuid,
    pub trip_id: Uuid,
    #[schema(example = "Surf lesson")]
    pub title: String,
    #[schema(example = "outdoors")]
    pub category: String,
    pub scheduled_at: Option<DateTime<Utc>>,
    #[schema(value_type = String)]
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

/// Client payload for proposing an activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDraft {
    pub trip_id: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub scheduled_at: Option<String>,
}

/// Validated input for inserting an activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    pub trip_id: Uuid,
    pub title: String,
    pub category: String,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub created_by: UserId,
}
