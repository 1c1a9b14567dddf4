//! Itinerary handlers.
//!
//! ```text
//! GET  /api/trips/{tripId}/itinerary
//! POST /api/trips/{tripId}/itinerary {"name":"Time Out Market","dayIndex":1}
//! ```

use actix_web::{HttpResponse, get, post, web};

use crate::domain::{Place, PlaceDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::responses::{created_json, ok_json};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Places ordered by day, then position within the day.
#[utoipa::path(
    get,
    path = "/api/trips/{tripId}/itinerary",
    params(("tripId" = String, Path, description = "Trip UUID")),
    responses(
        (status = 200, description = "Itinerary places", body = [Place]),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 401, description = "Not signed in", body = ErrorSchema)
    ),
    tags = ["itinerary"],
    operation_id = "listItinerary"
)]
#[get("/trips/{trip_id}/itinerary")]
pub async fn list_places(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    ok_json(state.itinerary.list_for_trip(&path.into_inner()).await)
}

/// Append a place at the end of its day.
#[utoipa::path(
    post,
    path = "/api/trips/{tripId}/itinerary",
    params(("tripId" = String, Path, description = "Trip UUID")),
    request_body = PlaceDraft,
    responses(
        (status = 201, description = "Place added", body = Place),
        (status = 400, description = "Missing name or negative day", body = ErrorSchema),
        (status = 401, description = "Not signed in", body = ErrorSchema)
    ),
    tags = ["itinerary"],
    operation_id = "addItineraryPlace"
)]
#[post("/trips/{trip_id}/itinerary")]
pub async fn add_place(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<PlaceDraft>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    created_json(
        state
            .itinerary
            .add_place(&path.into_inner(), payload.into_inner())
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

    use crate::domain::ports::FIXTURE_TRIP_ID;
    use crate::inbound::http::test_utils::{fixture_app, sign_in};

    #[rstest]
    #[case(json!({ "name": "Belém Tower" }), StatusCode::CREATED)]
    #[case(json!({ "name": "  " }), StatusCode::BAD_REQUEST)]
    #[case(json!({ "name": "Belém Tower", "dayIndex": -1 }), StatusCode::BAD_REQUEST)]
    #[actix_rt::test]
    async fn adding_places_validates_the_draft(#[case] draft: Value, #[case] expected: StatusCode) {
        let app = fixture_app!(add_place);
        let cookie = sign_in(&app).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/trips/{FIXTURE_TRIP_ID}/itinerary"))
                .cookie(cookie)
                .set_json(draft)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), expected);
    }

    #[actix_rt::test]
    async fn listing_returns_the_fixture_itinerary() {
        let app = fixture_app!(list_places);
        let cookie = sign_in(&app).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/trips/{FIXTURE_TRIP_ID}/itinerary"))
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body[0]["position"], 0);
    }
}
