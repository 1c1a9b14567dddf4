//! PostgreSQL-backed `SurveyRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{BackendError, SurveyRepository};
use crate::domain::{NewSurveyResponse, Survey, SurveyResponse};

use super::error_mapping::{map_diesel_error, map_diesel_error_with, map_pool_error};
use super::models::{NewSurveyResponseRow, SurveyResponseRow, SurveyRow};
use super::pool::DbPool;
use super::schema::{survey_responses, surveys};

/// Diesel implementation of [`SurveyRepository`].
#[derive(Clone)]
pub struct DieselSurveyRepository {
    pool: DbPool,
}

impl DieselSurveyRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SurveyRepository for DieselSurveyRepository {
    async fn find(&self, survey_id: Uuid) -> Result<Option<Survey>, BackendError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = surveys::table
            .filter(surveys::id.eq(survey_id))
            .select(SurveyRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Survey::from))
    }

    async fn insert_response(
        &self,
        response: &NewSurveyResponse,
    ) -> Result<SurveyResponse, BackendError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(survey_responses::table)
            .values(&NewSurveyResponseRow {
                survey_id: response.survey_id,
                user_id: *response.user_id.as_uuid(),
                answers: &response.answers,
            })
            .returning(SurveyResponseRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(SurveyResponse::from)
            .map_err(|error| map_diesel_error_with(error, "response already submitted"))
    }
}
