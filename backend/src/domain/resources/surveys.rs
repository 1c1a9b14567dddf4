//! Surveys resource.

use std::sync::Arc;

use mockable::Clock;
use serde_json::json;

use crate::domain::outcome::{Outcome, err, err_with_details};
use crate::domain::ports::SurveyRepository;
use crate::domain::validation::{FieldName, missing_field, require_id};
use crate::domain::{NewSurveyResponse, ResponseDraft, Survey, SurveyResponse, UserId};

use super::{backend_failure, not_found};

const SURVEY_ID: FieldName = FieldName::new("surveyId");
const ANSWERS: FieldName = FieldName::new("answers");

/// Survey operations over a [`SurveyRepository`].
#[derive(Clone)]
pub struct SurveysResource {
    repo: Arc<dyn SurveyRepository>,
    clock: Arc<dyn Clock>,
}

impl SurveysResource {
    /// Wrap a survey repository; `clock` decides whether a survey has closed.
    pub fn new(repo: Arc<dyn SurveyRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// A single survey.
    pub async fn get(&self, survey_id: &str) -> Outcome<Survey> {
        let survey_id = require_id(SURVEY_ID, Some(survey_id))?;
        self.find(survey_id).await
    }

    /// Record `user`'s answers to an open survey.
    ///
    /// `answers` must be a JSON object. Answering twice is rejected by the
    /// backend and reported as a failure of this operation.
    pub async fn submit_response(
        &self,
        user: &UserId,
        survey_id: &str,
        draft: ResponseDraft,
    ) -> Outcome<SurveyResponse> {
        let survey_id = require_id(SURVEY_ID, Some(survey_id))?;
        let answers = match draft.answers {
            Some(answers) if answers.is_object() => answers,
            Some(serde_json::Value::Null) | None => return Err(missing_field(ANSWERS)),
            Some(_) => {
                return err_with_details(
                    "answers must be an object",
                    json!({ "field": ANSWERS.as_str(), "code": "invalid_type" }),
                );
            }
        };

        let survey = self.find(survey_id).await?;
        if !survey.is_open_at(self.clock.utc()) {
            return err("survey is closed");
        }

        let response = NewSurveyResponse {
            survey_id,
            user_id: user.clone(),
            answers,
        };
        self.repo
            .insert_response(&response)
            .await
            .map_err(backend_failure("submit survey response"))
    }

    async fn find(&self, survey_id: uuid::Uuid) -> Outcome<Survey> {
        self.repo
            .find(survey_id)
            .await
            .map_err(backend_failure("load survey"))?
            .ok_or_else(|| not_found("survey"))
    }
}
