//! Survey handlers.
//!
//! ```text
//! GET  /api/surveys/{surveyId}
//! POST /api/surveys/{surveyId}/responses {"answers":{"dinner":"tapas"}}
//! ```

use actix_web::{HttpResponse, get, post, web};

use crate::domain::{ResponseDraft, Survey, SurveyResponse};
use crate::inbound::http::ApiResult;
use crate::inbound::http::responses::{created_json, ok_json};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

#[utoipa::path(
    get,
    path = "/api/surveys/{surveyId}",
    params(("surveyId" = String, Path, description = "Survey UUID")),
    responses(
        (status = 200, description = "Survey with its questions", body = Survey),
        (status = 401, description = "Not signed in", body = ErrorSchema),
        (status = 404, description = "No such survey", body = ErrorSchema)
    ),
    tags = ["surveys"],
    operation_id = "getSurvey"
)]
#[get("/surveys/{survey_id}")]
pub async fn get_survey(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    ok_json(state.surveys.get(&path.into_inner()).await)
}

/// Answer an open survey once.
#[utoipa::path(
    post,
    path = "/api/surveys/{surveyId}/responses",
    params(("surveyId" = String, Path, description = "Survey UUID")),
    request_body = ResponseDraft,
    responses(
        (status = 201, description = "Response recorded", body = SurveyResponse),
        (status = 400, description = "Malformed answers, closed survey or repeat answer", body = ErrorSchema),
        (status = 401, description = "Not signed in", body = ErrorSchema),
        (status = 404, description = "No such survey", body = ErrorSchema)
    ),
    tags = ["surveys"],
    operation_id = "submitSurveyResponse"
)]
#[post("/surveys/{survey_id}/responses")]
pub async fn submit_response(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<ResponseDraft>,
) -> ApiResult<HttpResponse> {
    let user = session.require_user_id()?;
    created_json(
        state
            .surveys
            .submit_response(&user, &path.into_inner(), payload.into_inner())
            .await,
    )
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::{Value, json};

    use crate::domain::ports::{FIXTURE_SURVEY_ID, FIXTURE_USER_ID};
    use crate::inbound::http::test_utils::{fixture_app, sign_in};

    #[actix_rt::test]
    async fn response_is_recorded_for_the_caller() {
        let app = fixture_app!(submit_response);
        let cookie = sign_in(&app).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/surveys/{FIXTURE_SURVEY_ID}/responses"))
                .cookie(cookie)
                .set_json(json!({ "answers": { "dinner": "tapas" } }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["userId"], FIXTURE_USER_ID.to_string());
        assert_eq!(body["answers"]["dinner"], "tapas");
    }

    #[rstest]
    #[case(json!({}), "answers is required")]
    #[case(json!({ "answers": ["tapas"] }), "answers must be an object")]
    #[actix_rt::test]
    async fn malformed_answers_are_rejected(#[case] draft: Value, #[case] message: &str) {
        let app = fixture_app!(submit_response);
        let cookie = sign_in(&app).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/surveys/{FIXTURE_SURVEY_ID}/responses"))
                .cookie(cookie)
                .set_json(draft)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], message);
    }
}
