//! Route table for the `/api` scope.
//!
//! ```text
//! GET  /api/ping
//! POST /api/auth/login          POST /api/auth/logout      GET /api/auth/session
//! GET  /api/trips               POST /api/trips
//! GET  /api/trips/{id}          PUT  /api/trips/{id}
//! POST /api/groups              GET  /api/groups/{id}
//! GET  /api/groups/{id}/members POST /api/groups/{id}/members
//! GET  /api/tasks?groupId=..    POST /api/tasks            PUT /api/tasks/{id}
//! GET  /api/trips/{id}/itinerary  POST /api/trips/{id}/itinerary
//! GET  /api/trips/{id}/activities POST /api/activities
//! GET  /api/trips/{id}/images     POST /api/images
//! GET  /api/surveys/{id}        POST /api/surveys/{id}/responses
//! GET  /api/admin/trips
//! *    /api/admin/{activities,places,surveys}   410 Gone
//! ```

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;
use tracing::debug;

use crate::domain::Error;
use crate::inbound::http::ApiResult;

use super::activities::{create_activity, list_activities};
use super::admin::{configure_retired, trip_overview};
use super::auth::{current_session, login, logout};
use super::groups::{add_member, create_group, get_group, list_members};
use super::images::{list_images, register_image};
use super::itinerary::{add_place, list_places};
use super::ping::ping;
use super::surveys::{get_survey, submit_response};
use super::tasks::{create_task, list_tasks, update_task};
use super::trips::{create_trip, get_trip, list_trips, update_trip};

fn rejected(source: &'static str, detail: String) -> Error {
    Error::invalid_request(format!("malformed {source}"))
        .with_details(json!({ "source": source, "reason": detail }))
}

fn json_rejected(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    rejected("body", err.to_string()).into()
}

fn query_rejected(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    rejected("query", err.to_string()).into()
}

fn path_rejected(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    rejected("path", err.to_string()).into()
}

/// Fallback for `/api` paths and methods with no handler.
pub async fn unmatched(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found(format!(
        "no route for {} {}",
        req.method(),
        req.path()
    )))
}

/// Register every `/api` handler on `cfg`.
///
/// Callers mount this inside `web::scope("/api")` behind the session
/// middleware. Extractor failures and unknown paths answer with the JSON
/// error body like every other failure.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_rejected))
        .app_data(web::QueryConfig::default().error_handler(query_rejected))
        .app_data(web::PathConfig::default().error_handler(path_rejected))
        .default_service(web::to(unmatched));
    cfg.service(ping)
        .service(login)
        .service(logout)
        .service(current_session)
        .service(list_trips)
        .service(create_trip)
        .service(get_trip)
        .service(update_trip)
        .service(create_group)
        .service(get_group)
        .service(list_members)
        .service(add_member)
        .service(list_tasks)
        .service(create_task)
        .service(update_task)
        .service(list_places)
        .service(add_place)
        .service(list_activities)
        .service(create_activity)
        .service(list_images)
        .service(register_image)
        .service(get_survey)
        .service(submit_response)
        .service(trip_overview)
        .configure(configure_retired);
}
