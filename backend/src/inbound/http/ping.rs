//! Connectivity check used by clients before signing in.

use actix_web::{HttpResponse, get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct PingResponse {
    #[schema(example = "ok")]
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/api/ping",
    responses((status = 200, description = "Service reachable", body = PingResponse)),
    tags = ["health"],
    operation_id = "ping",
    security([])
)]
#[get("/ping")]
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok().json(PingResponse {
        status: "ok".to_owned(),
    })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    #[actix_rt::test]
    async fn ping_reports_ok() {
        let app = test::init_service(App::new().service(web::scope("/api").service(ping))).await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/api/ping").to_request())
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
