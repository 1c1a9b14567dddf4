//! Middleware converting handler panics into redacted 500 responses.
//!
//! Wrap it inside [`Trace`](super::Trace) so the generated error still carries
//! the request's trace identifier.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, ResponseError};
use futures_util::FutureExt;
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::error;

use crate::domain::Error as DomainError;

/// Panic-catching middleware factory.
#[derive(Clone, Copy, Debug, Default)]
pub struct CatchPanic;

impl<S, B> Transform<S, ServiceRequest> for CatchPanic
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CatchPanicMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CatchPanicMiddleware { service }))
    }
}

/// Service produced by [`CatchPanic`].
pub struct CatchPanicMiddleware<S> {
    service: S,
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

impl<S, B> Service<ServiceRequest> for CatchPanicMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let http_req = req.request().clone();
        let called = std::panic::catch_unwind(AssertUnwindSafe(|| self.service.call(req)));

        Box::pin(async move {
            let outcome = match called {
                Ok(fut) => AssertUnwindSafe(fut).catch_unwind().await,
                Err(payload) => Err(payload),
            };
            match outcome {
                Ok(result) => result.map(ServiceResponse::map_into_left_body),
                Err(payload) => {
                    error!(
                        panic = panic_message(payload.as_ref()),
                        path = http_req.path(),
                        "handler panicked"
                    );
                    let response = DomainError::internal("handler panicked").error_response();
                    Ok(ServiceResponse::new(http_req, response).map_into_right_body())
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};
    use serde_json::Value;

    use crate::Trace;

    async fn explode() -> HttpResponse {
        panic!("itinerary index out of bounds");
    }

    #[actix_web::test]
    async fn panics_become_redacted_server_errors() {
        let app = test::init_service(
            App::new()
                .wrap(CatchPanic)
                .route("/boom", web::get().to(explode)),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/boom").to_request()).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Internal server error");
        assert!(!body.to_string().contains("out of bounds"));
    }

    #[actix_web::test]
    async fn panic_responses_keep_the_trace_id() {
        let app = test::init_service(
            App::new()
                .wrap(CatchPanic)
                .wrap(Trace)
                .route("/boom", web::get().to(explode)),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/boom").to_request()).await;
        let header = res
            .headers()
            .get("trace-id")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .expect("trace id header");
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["traceId"], Value::String(header));
    }

    #[actix_web::test]
    async fn healthy_handlers_pass_through() {
        let app = test::init_service(
            App::new()
                .wrap(CatchPanic)
                .route("/", web::get().to(|| async { HttpResponse::Ok().body("fine") })),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}
