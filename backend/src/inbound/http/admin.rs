//! Admin handlers.
//!
//! `GET /api/admin/trips` runs the overview procedure as the service role.
//! The activity, place and survey admin endpoints are retired and answer
//! every method with `410 Gone`.

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::inbound::http::ApiResult;
use crate::inbound::http::responses::ok_json;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Paths that once hosted admin editors.
pub const RETIRED_ADMIN_PATHS: [&str; 3] = [
    "/admin/activities",
    "/admin/places",
    "/admin/surveys",
];

/// Per-trip overview computed by the backend.
#[utoipa::path(
    get,
    path = "/api/admin/trips",
    responses(
        (status = 200, description = "Overview rows", body = Object),
        (status = 401, description = "Not signed in", body = ErrorSchema),
        (status = 503, description = "Backend unavailable", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "adminTripOverview"
)]
#[get("/admin/trips")]
pub async fn trip_overview(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    ok_json(state.admin.trip_overview().await)
}

/// Handler for every method on the retired admin paths.
///
/// The body carries only the `error` message, without a code or trace id.
#[utoipa::path(
    get,
    path = "/api/admin/{retired}",
    params(("retired" = String, Path, description = "activities, places or surveys")),
    responses((status = 410, description = "Endpoint retired", body = Object,
        example = json!({ "error": "This endpoint is no longer available." }))),
    tags = ["admin"],
    operation_id = "retiredAdminEndpoint",
    security([])
)]
pub async fn retired(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Gone().json(json!({ "error": state.admin.retired_message() }))
}

/// Register [`retired`] on each path in [`RETIRED_ADMIN_PATHS`] for any method.
pub fn configure_retired(cfg: &mut web::ServiceConfig) {
    for path in RETIRED_ADMIN_PATHS {
        cfg.service(web::resource(path).route(web::route().to(retired)));
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::http::{Method, StatusCode};
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::Value;

    use crate::Trace;
    use crate::domain::RETIRED_ENDPOINT_MESSAGE;
    use crate::inbound::http::test_utils::{fixture_app, sign_in};

    #[rstest]
    #[case(Method::GET, "/api/admin/activities")]
    #[case(Method::POST, "/api/admin/places")]
    #[case(Method::DELETE, "/api/admin/surveys")]
    #[case(Method::PATCH, "/api/admin/activities")]
    #[actix_rt::test]
    async fn retired_paths_are_gone_for_every_method(#[case] method: Method, #[case] uri: &str) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::fixtures()))
                .wrap(Trace)
                .service(web::scope("/api").configure(configure_retired)),
        )
        .await;
        let res = test::call_service(
            &app,
            test::TestRequest::default()
                .method(method)
                .uri(uri)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::GONE);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "error": RETIRED_ENDPOINT_MESSAGE }));
    }

    #[actix_rt::test]
    async fn overview_proxies_the_procedure_result() {
        let app = fixture_app!(trip_overview);
        let cookie = sign_in(&app).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/admin/trips")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert!(body.is_array());
    }
}
