//! Task handlers.
//!
//! ```text
//! GET  /api/tasks?groupId=…
//! POST /api/tasks {"groupId":"…","title":"Book the ferry"}
//! PUT  /api/tasks/{taskId} {"status":"done"}
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{Task, TaskDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::responses::{created_json, ok_json};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Query string of `GET /api/tasks`.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct TaskQuery {
    /// Group whose tasks to list.
    pub group_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/tasks",
    params(TaskQuery),
    responses(
        (status = 200, description = "Tasks ordered by due date", body = [Task]),
        (status = 400, description = "Missing or malformed groupId", body = ErrorSchema),
        (status = 401, description = "Not signed in", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "listTasks"
)]
#[get("/tasks")]
pub async fn list_tasks(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<TaskQuery>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    ok_json(state.tasks.list_for_group(query.group_id.as_deref()).await)
}

/// Create a task; `groupId` is checked before anything reaches the backend.
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = TaskDraft,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Missing groupId or title, or unknown status", body = ErrorSchema),
        (status = 401, description = "Not signed in", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "createTask"
)]
#[post("/tasks")]
pub async fn create_task(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<TaskDraft>,
) -> ApiResult<HttpResponse> {
    let user = session.require_user_id()?;
    created_json(state.tasks.create(&user, payload.into_inner()).await)
}

#[utoipa::path(
    put,
    path = "/api/tasks/{taskId}",
    params(("taskId" = String, Path, description = "Task UUID")),
    request_body = TaskDraft,
    responses(
        (status = 200, description = "Updated task", body = Task),
        (status = 400, description = "Nothing to change or malformed field", body = ErrorSchema),
        (status = 401, description = "Not signed in", body = ErrorSchema),
        (status = 404, description = "No such task", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "updateTask"
)]
#[put("/tasks/{task_id}")]
pub async fn update_task(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<TaskDraft>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    ok_json(
        state
            .tasks
            .update(&path.into_inner(), payload.into_inner())
            .await,
    )
}
