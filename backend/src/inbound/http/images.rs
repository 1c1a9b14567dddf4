//! Trip image handlers. Uploads go to object storage directly; these
//! endpoints only record and list the object paths.
//!
//! ```text
//! GET  /api/trips/{tripId}/images
//! POST /api/images {"tripId":"…","storagePath":"trips/…/beach.jpg"}
//! ```

use actix_web::{HttpResponse, get, post, web};

use crate::domain::{ImageDraft, TripImage};
use crate::inbound::http::ApiResult;
use crate::inbound::http::responses::{created_json, ok_json};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

#[utoipa::path(
    get,
    path = "/api/trips/{tripId}/images",
    params(("tripId" = String, Path, description = "Trip UUID")),
    responses(
        (status = 200, description = "Images, newest first", body = [TripImage]),
        (status = 401, description = "Not signed in", body = ErrorSchema)
    ),
    tags = ["images"],
    operation_id = "listTripImages"
)]
#[get("/trips/{trip_id}/images")]
pub async fn list_images(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    ok_json(state.images.list_for_trip(&path.into_inner()).await)
}

#[utoipa::path(
    post,
    path = "/api/images",
    request_body = ImageDraft,
    responses(
        (status = 201, description = "Image registered", body = TripImage),
        (status = 400, description = "Missing field or absolute path", body = ErrorSchema),
        (status = 401, description = "Not signed in", body = ErrorSchema)
    ),
    tags = ["images"],
    operation_id = "registerImage"
)]
#[post("/images")]
pub async fn register_image(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ImageDraft>,
) -> ApiResult<HttpResponse> {
    let user = session.require_user_id()?;
    created_json(state.images.register(&user, payload.into_inner()).await)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::json;

    use crate::domain::ports::FIXTURE_TRIP_ID;
    use crate::inbound::http::test_utils::{fixture_app, sign_in};

    #[rstest]
    #[case("trips/lisbon/beach.jpg", StatusCode::CREATED)]
    #[case("/etc/passwd", StatusCode::BAD_REQUEST)]
    #[case("trips/../secrets.jpg", StatusCode::BAD_REQUEST)]
    #[actix_rt::test]
    async fn storage_paths_must_be_relative(#[case] path: &str, #[case] expected: StatusCode) {
        let app = fixture_app!(register_image);
        let cookie = sign_in(&app).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/images")
                .cookie(cookie)
                .set_json(json!({ "tripId": FIXTURE_TRIP_ID, "storagePath": path }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), expected);
    }
}
