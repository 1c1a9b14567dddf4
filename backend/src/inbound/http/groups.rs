//! Group and membership handlers.
//!
//! ```text
//! POST /api/groups {"name":"Uni friends"}
//! GET  /api/groups/{groupId}
//! GET  /api/groups/{groupId}/members
//! POST /api/groups/{groupId}/members {"userId":"…","role":"member"}
//! ```

use actix_web::{HttpResponse, get, post, web};

use crate::domain::{Group, GroupDraft, GroupMember, MemberDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::responses::{created_json, ok_json};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Create a group owned by the caller.
#[utoipa::path(
    post,
    path = "/api/groups",
    request_body = GroupDraft,
    responses(
        (status = 201, description = "Group created; caller enrolled as owner", body = Group),
        (status = 400, description = "Missing name", body = ErrorSchema),
        (status = 401, description = "Not signed in", body = ErrorSchema)
    ),
    tags = ["groups"],
    operation_id = "createGroup"
)]
#[post("/groups")]
pub async fn create_group(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<GroupDraft>,
) -> ApiResult<HttpResponse> {
    let user = session.require_user_id()?;
    created_json(state.groups.create(&user, payload.into_inner()).await)
}

#[utoipa::path(
    get,
    path = "/api/groups/{groupId}",
    params(("groupId" = String, Path, description = "Group UUID")),
    responses(
        (status = 200, description = "Group", body = Group),
        (status = 401, description = "Not signed in", body = ErrorSchema),
        (status = 404, description = "No such group", body = ErrorSchema)
    ),
    tags = ["groups"],
    operation_id = "getGroup"
)]
#[get("/groups/{group_id}")]
pub async fn get_group(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    ok_json(state.groups.get(&path.into_inner()).await)
}

/// Members with owners listed first.
#[utoipa::path(
    get,
    path = "/api/groups/{groupId}/members",
    params(("groupId" = String, Path, description = "Group UUID")),
    responses(
        (status = 200, description = "Members", body = [GroupMember]),
        (status = 401, description = "Not signed in", body = ErrorSchema),
        (status = 404, description = "No such group", body = ErrorSchema)
    ),
    tags = ["groups"],
    operation_id = "listGroupMembers"
)]
#[get("/groups/{group_id}/members")]
pub async fn list_members(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    ok_json(state.groups.list_members(&path.into_inner()).await)
}

#[utoipa::path(
    post,
    path = "/api/groups/{groupId}/members",
    params(("groupId" = String, Path, description = "Group UUID")),
    request_body = MemberDraft,
    responses(
        (status = 201, description = "Member added", body = GroupMember),
        (status = 400, description = "Invalid user, unknown role or already a member", body = ErrorSchema),
        (status = 401, description = "Not signed in", body = ErrorSchema),
        (status = 404, description = "No such group", body = ErrorSchema)
    ),
    tags = ["groups"],
    operation_id = "addGroupMember"
)]
#[post("/groups/{group_id}/members")]
pub async fn add_member(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<MemberDraft>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    created_json(
        state
            .groups
            .add_member(&path.into_inner(), payload.into_inner())
            .await,
    )
}
