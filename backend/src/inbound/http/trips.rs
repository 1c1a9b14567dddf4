//! Trip handlers.
//!
//! ```text
//! GET  /api/trips
//! POST /api/trips {"groupId":"…","name":"Lisbon long weekend"}
//! GET  /api/trips/{tripId}
//! PUT  /api/trips/{tripId} {"endDate":"2026-06-09"}
//! ```

use actix_web::{HttpResponse, get, post, put, web};

use crate::domain::{Trip, TripDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::responses::{created_json, ok_json};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Trips of every group the traveller belongs to.
#[utoipa::path(
    get,
    path = "/api/trips",
    responses(
        (status = 200, description = "Trips, newest first", body = [Trip]),
        (status = 401, description = "Not signed in", body = ErrorSchema),
        (status = 503, description = "Backend unavailable", body = ErrorSchema)
    ),
    tags = ["trips"],
    operation_id = "listTrips"
)]
#[get("/trips")]
pub async fn list_trips(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let user = session.require_user_id()?;
    ok_json(state.trips.list_for_user(&user).await)
}

#[utoipa::path(
    post,
    path = "/api/trips",
    request_body = TripDraft,
    responses(
        (status = 201, description = "Trip created", body = Trip),
        (status = 400, description = "Missing or malformed field", body = ErrorSchema),
        (status = 401, description = "Not signed in", body = ErrorSchema)
    ),
    tags = ["trips"],
    operation_id = "createTrip"
)]
#[post("/trips")]
pub async fn create_trip(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<TripDraft>,
) -> ApiResult<HttpResponse> {
    let user = session.require_user_id()?;
    created_json(state.trips.create(&user, payload.into_inner()).await)
}

#[utoipa::path(
    get,
    path = "/api/trips/{tripId}",
    params(("tripId" = String, Path, description = "Trip UUID")),
    responses(
        (status = 200, description = "Trip", body = Trip),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 401, description = "Not signed in", body = ErrorSchema),
        (status = 404, description = "No such trip", body = ErrorSchema)
    ),
    tags = ["trips"],
    operation_id = "getTrip"
)]
#[get("/trips/{trip_id}")]
pub async fn get_trip(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    ok_json(state.trips.get(&path.into_inner()).await)
}

/// Partial update; omitted fields keep their value.
#[utoipa::path(
    put,
    path = "/api/trips/{tripId}",
    params(("tripId" = String, Path, description = "Trip UUID")),
    request_body = TripDraft,
    responses(
        (status = 200, description = "Updated trip", body = Trip),
        (status = 400, description = "Nothing to change or malformed field", body = ErrorSchema),
        (status = 401, description = "Not signed in", body = ErrorSchema),
        (status = 404, description = "No such trip", body = ErrorSchema)
    ),
    tags = ["trips"],
    operation_id = "updateTrip"
)]
#[put("/trips/{trip_id}")]
pub async fn update_trip(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<TripDraft>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    ok_json(
        state
            .trips
            .update(&path.into_inner(), payload.into_inner())
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

    use crate::domain::ports::{FIXTURE_GROUP_ID, FIXTURE_TRIP_ID};
    use crate::inbound::http::test_utils::{fixture_app, sign_in};

    #[actix_rt::test]
    async fn listing_requires_a_session() {
        let app = fixture_app!(list_trips);
        let res = test::call_service(&app, test::TestRequest::get().uri("/api/trips").to_request())
            .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "login required");
    }

    #[actix_rt::test]
    async fn signed_in_travellers_see_their_trips() {
        let app = fixture_app!(list_trips);
        let cookie = sign_in(&app).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/trips").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body[0]["id"], FIXTURE_TRIP_ID.to_string());
    }

    #[actix_rt::test]
    async fn creating_returns_201() {
        let app = fixture_app!(create_trip);
        let cookie = sign_in(&app).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/trips")
                .cookie(cookie)
                .set_json(json!({ "groupId": FIXTURE_GROUP_ID, "name": "Porto" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["name"], "Porto");
    }

    #[rstest]
    #[case("not-a-uuid", StatusCode::BAD_REQUEST)]
    #[case("00000000-0000-0000-0000-000000000000", StatusCode::NOT_FOUND)]
    #[actix_rt::test]
    async fn lookup_failures_map_to_statuses(#[case] id: &str, #[case] expected: StatusCode) {
        let app = fixture_app!(get_trip);
        let cookie = sign_in(&app).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/trips/{id}"))
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), expected);
    }

    #[actix_rt::test]
    async fn empty_update_is_rejected() {
        let app = fixture_app!(update_trip);
        let cookie = sign_in(&app).await;
        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&format!("/api/trips/{FIXTURE_TRIP_ID}"))
                .cookie(cookie)
                .set_json(json!({}))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "no changes supplied");
    }
}
