//! Port for surveys and their responses.

use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

use crate::domain::{NewSurveyResponse, Survey, SurveyResponse};

use super::BackendError;
use super::fixtures::{FIXTURE_SURVEY_ID, FIXTURE_TRIP_ID, fixture_id, fixture_timestamp};

/// Survey lookup and response storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SurveyRepository: Send + Sync {
    /// Find a survey by id.
    async fn find(&self, survey_id: Uuid) -> Result<Option<Survey>, BackendError>;

    /// Record a response; a second response by the same user is a
    /// [`BackendError::Constraint`].
    async fn insert_response(
        &self,
        response: &NewSurveyResponse,
    ) -> Result<SurveyResponse, BackendError>;
}

/// Fixture implementation with one open survey on the fixture trip.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSurveyRepository;

#[async_trait]
impl SurveyRepository for FixtureSurveyRepository {
    async fn find(&self, survey_id: Uuid) -> Result<Option<Survey>, BackendError> {
        if survey_id != FIXTURE_SURVEY_ID {
            return Ok(None);
        }
        Ok(Some(Survey {
            id: FIXTURE_SURVEY_ID,
            trip_id: FIXTURE_TRIP_ID,
            title: "Where should we eat on Friday?".to_owned(),
            questions: json!([
                { "id": "dinner", "kind": "choice", "options": ["seafood", "tapas"] }
            ]),
            closes_at: None,
        }))
    }

    async fn insert_response(
        &self,
        response: &NewSurveyResponse,
    ) -> Result<SurveyResponse, BackendError> {
        Ok(SurveyResponse {
            id: fixture_id(&format!("response:{}", response.user_id)),
            survey_id: response.survey_id,
            user_id: response.user_id.clone(),
            answers: response.answers.clone(),
            submitted_at: fixture_timestamp(),
        })
    }
}
