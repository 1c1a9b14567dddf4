//! OpenAPI schemas for types that do not derive `ToSchema` themselves.

use utoipa::ToSchema;

/// Failure body returned by every endpoint.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Stable machine-readable code.
    #[schema(example = "invalid_request")]
    code: crate::domain::ErrorCode,
    /// Human-readable message.
    #[schema(example = "groupId is required")]
    error: String,
    /// Request correlation id, echoed in the `trace-id` header.
    #[schema(example = "6f1c2b1e-3c3a-4a55-9d1b-0c6a1b2f4e01")]
    trace_id: Option<String>,
    /// Field-level detail such as `{ "field": "groupId", "code": "missing_field" }`.
    details: Option<serde_json::Value>,
}
