//! Activity handlers.
//!
//! ```text
//! GET  /api/trips/{tripId}/activities
//! POST /api/activities {"tripId":"…","title":"Surf lesson","category":"outdoors"}
//! ```

use actix_web::{HttpResponse, get, post, web};

use crate::domain::{Activity, ActivityDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::responses::{created_json, ok_json};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

#[utoipa::path(
    get,
    path = "/api/trips/{tripId}/activities",
    params(("tripId" = String, Path, description = "Trip UUID")),
    responses(
        (status = 200, description = "Activities, scheduled ones first", body = [Activity]),
        (status = 401, description = "Not signed in", body = ErrorSchema)
    ),
    tags = ["activities"],
    operation_id = "listTripActivities"
)]
#[get("/trips/{trip_id}/activities")]
pub async fn list_activities(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    ok_json(state.activities.list_for_trip(&path.into_inner()).await)
}

/// Propose an activity; `category` must be one of the configured labels.
#[utoipa::path(
    post,
    path = "/api/activities",
    request_body = ActivityDraft,
    responses(
        (status = 201, description = "Activity created", body = Activity),
        (status = 400, description = "Missing field or unknown category", body = ErrorSchema),
        (status = 401, description = "Not signed in", body = ErrorSchema)
    ),
    tags = ["activities"],
    operation_id = "createActivity"
)]
#[post("/activities")]
pub async fn create_activity(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ActivityDraft>,
) -> ApiResult<HttpResponse> {
    let user = session.require_user_id()?;
    created_json(state.activities.create(&user, payload.into_inner()).await)
}
