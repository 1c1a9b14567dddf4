//! Trip surveys and their responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use super::UserId;

/// A survey sent to trip participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: Uuid,
    pub trip_id: Uuid,
    #[schema(example = "Where should we eat on Friday?")]
    pub title: String,
    #[schema(value_type = Object)]
    pub questions: Value,
    pub closes_at: Option<DateTime<Utc>>,
}

impl Survey {
    /// Whether responses are still accepted at `now`.
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        self.closes_at.is_none_or(|closes_at| now < closes_at)
    }
}

/// One participant's answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub id: Uuid,
    pub survey_id: Uuid,
    #[schema(value_type = String)]
    pub user_id: UserId,
    #[schema(value_type = Object)]
    pub answers: Value,
    pub submitted_at: DateTime<Utc>,
}

/// Client payload for answering a survey.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDraft {
    #[schema(value_type = Option<Object>)]
    pub answers: Option<Value>,
}

/// Validated input for recording a response.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSurveyResponse {
    pub survey_id: Uuid,
    pub user_id: UserId,
    pub answers: Value,
}
