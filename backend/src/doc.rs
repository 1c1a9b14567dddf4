//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every `/api` handler, the health probes and the
//! entity schemas. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` prints it for client tooling.

use crate::domain::{
    Activity, ActivityDraft, ErrorCode, Group, GroupDraft, GroupMember, ImageDraft, MemberDraft,
    MemberRole, Place, PlaceDraft, ResponseDraft, Survey, SurveyResponse, Task, TaskDraft, Trip,
    TripDraft, TripImage,
};
use crate::inbound::http::auth::{LoginRequest, SessionResponse};
use crate::inbound::http::ping::PingResponse;
use crate::inbound::http::schemas::ErrorSchema;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/auth/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Tripboard backend API",
        description = "Group trip planning: trips, groups, tasks, itineraries, activities, images and surveys.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::ping::ping,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::auth::current_session,
        crate::inbound::http::trips::list_trips,
        crate::inbound::http::trips::create_trip,
        crate::inbound::http::trips::get_trip,
        crate::inbound::http::trips::update_trip,
        crate::inbound::http::groups::create_group,
        crate::inbound::http::groups::get_group,
        crate::inbound::http::groups::list_members,
        crate::inbound::http::groups::add_member,
        crate::inbound::http::tasks::list_tasks,
        crate::inbound::http::tasks::create_task,
        crate::inbound::http::tasks::update_task,
        crate::inbound::http::itinerary::list_places,
        crate::inbound::http::itinerary::add_place,
        crate::inbound::http::activities::list_activities,
        crate::inbound::http::activities::create_activity,
        crate::inbound::http::images::list_images,
        crate::inbound::http::images::register_image,
        crate::inbound::http::surveys::get_survey,
        crate::inbound::http::surveys::submit_response,
        crate::inbound::http::admin::trip_overview,
        crate::inbound::http::admin::retired,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCode,
        PingResponse,
        LoginRequest,
        SessionResponse,
        Trip,
        TripDraft,
        Group,
        GroupDraft,
        GroupMember,
        MemberDraft,
        MemberRole,
        Task,
        TaskDraft,
        Place,
        PlaceDraft,
        Activity,
        ActivityDraft,
        TripImage,
        ImageDraft,
        Survey,
        SurveyResponse,
        ResponseDraft,
    )),
    tags(
        (name = "auth", description = "Session sign-in and sign-out"),
        (name = "trips", description = "Trips visible to group members"),
        (name = "groups", description = "Travel groups and their members"),
        (name = "tasks", description = "Group to-do lists"),
        (name = "itinerary", description = "Ordered places per trip day"),
        (name = "activities", description = "Suggested trip activities"),
        (name = "images", description = "Trip photo metadata"),
        (name = "surveys", description = "Trip surveys and responses"),
        (name = "admin", description = "Service-role reports and retired editors"),
        (name = "health", description = "Connectivity and orchestration probes")
    )
)]
pub struct ApiDoc;
