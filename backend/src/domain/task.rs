//! Shared to-do items of a group.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::UserId;

/// A task row as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub group_id: Uuid,
    pub trip_id: Option<Uuid>,
    #[schema(example = "Book the ferry")]
    pub title: String,
    #[schema(example = "todo")]
    pub status: String,
    #[schema(value_type = Option<String>)]
    pub assignee_id: Option<UserId>,
    pub due_date: Option<NaiveDate>,
    #[schema(value_type = String)]
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

/// Client payload for creating or updating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub group_id: Option<String>,
    pub trip_id: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub assignee_id: Option<String>,
    pub due_date: Option<String>,
}

/// Validated input for inserting a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub group_id: Uuid,
    pub trip_id: Option<Uuid>,
    pub title: String,
    pub status: String,
    pub assignee_id: Option<UserId>,
    pub due_date: Option<NaiveDate>,
    pub created_by: UserId,
}

/// Validated partial update; `None` leaves a column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub status: Option<String>,
    pub assignee_id: Option<UserId>,
    pub due_date: Option<NaiveDate>,
}

impl TaskChanges {
    /// Whether the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.status.is_none()
            && self.assignee_id.is_none()
            && self.due_date.is_none()
    }
}
