//! Behaviour tests for the `/api` surface over fixture ports.
//!
//! Each request builds a fresh application sharing one session key, so the
//! cookie issued at sign-in stays valid for later steps.
//
// rstest-bdd generates guard variables with double underscores, which trips
// the non_snake_case lint under -D warnings.
#![allow(non_snake_case)]

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::http::{Method, header};
use actix_web::{App, test::{self}, web};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};
use tripboard::domain::TRACE_ID_HEADER;
use tripboard::domain::ports::{FIXTURE_EMAIL, FIXTURE_PASSWORD, FIXTURE_TRIP_ID};
use tripboard::inbound::http::routes;
use tripboard::inbound::http::state::HttpState;
use tripboard::{CatchPanic, Trace};

struct ApiWorld {
    key: Key,
    cookie: Option<Cookie<'static>>,
    last_status: Option<u16>,
    last_trace_id: Option<String>,
    last_body: Option<Value>,
}

impl std::fmt::Debug for ApiWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiWorld")
            .field("signed_in", &self.cookie.is_some())
            .field("last_status", &self.last_status)
            .field("last_body", &self.last_body)
            .finish_non_exhaustive()
    }
}

#[fixture]
fn world() -> ApiWorld {
    ApiWorld {
        key: Key::generate(),
        cookie: None,
        last_status: None,
        last_trace_id: None,
        last_body: None,
    }
}

struct ApiRequest<'a> {
    method: Method,
    path: &'a str,
    payload: Option<Value>,
    raw_json: Option<&'a str>,
}

fn send(world: &mut ApiWorld, request: ApiRequest<'_>) {
    let ApiRequest {
        method,
        path,
        payload,
        raw_json,
    } = request;
    let key = world.key.clone();
    let cookie = world.cookie.clone();

    let (status, trace_id, set_cookie, body) = actix_rt::System::new().block_on(async move {
        let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
            .cookie_name("session".to_owned())
            .cookie_secure(false)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::fixtures()))
                .wrap(CatchPanic)
                .wrap(Trace)
                .service(web::scope("/api").wrap(session).configure(routes::configure)),
        )
        .await;

        let mut req = test::TestRequest::default().method(method).uri(path);
        if let Some(cookie) = cookie {
            req = req.cookie(cookie);
        }
        if let Some(payload) = payload {
            req = req.set_json(payload);
        }
        if let Some(raw) = raw_json {
            req = req
                .insert_header((header::CONTENT_TYPE, "application/json"))
                .set_payload(raw.to_owned());
        }
        let res = test::call_service(&app, req.to_request()).await;
        let status = res.status().as_u16();
        let trace_id = res
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let set_cookie = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .map(Cookie::into_owned);
        let bytes = test::read_body(res).await;
        let body = serde_json::from_slice::<Value>(&bytes).ok();
        (status, trace_id, set_cookie, body)
    });

    if set_cookie.is_some() {
        world.cookie = set_cookie;
    }
    world.last_status = Some(status);
    world.last_trace_id = trace_id;
    world.last_body = body;
}

fn body(world: &ApiWorld) -> &Value {
    world.last_body.as_ref().expect("response body")
}

#[given("a running API backed by fixtures")]
fn a_running_api_backed_by_fixtures(world: &mut ApiWorld) {
    let _ = world;
}

#[given("the client has signed in")]
fn the_client_has_signed_in(world: &mut ApiWorld) {
    send(
        world,
        ApiRequest {
            method: Method::POST,
            path: "/api/auth/login",
            payload: Some(json!({ "email": FIXTURE_EMAIL, "password": FIXTURE_PASSWORD })),
            raw_json: None,
        },
    );
    assert_eq!(world.last_status, Some(200));
    assert!(world.cookie.is_some(), "login should set a session cookie");
}

#[when("the client pings the API")]
fn the_client_pings_the_api(world: &mut ApiWorld) {
    send(
        world,
        ApiRequest {
            method: Method::GET,
            path: "/api/ping",
            payload: None,
            raw_json: None,
        },
    );
}

#[when("the client lists trips")]
fn the_client_lists_trips(world: &mut ApiWorld) {
    send(
        world,
        ApiRequest {
            method: Method::GET,
            path: "/api/trips",
            payload: None,
            raw_json: None,
        },
    );
}

#[when("the client creates a task without a group id")]
fn the_client_creates_a_task_without_a_group_id(world: &mut ApiWorld) {
    send(
        world,
        ApiRequest {
            method: Method::POST,
            path: "/api/tasks",
            payload: Some(json!({ "title": "Book the ferry" })),
            raw_json: None,
        },
    );
}

#[when("the client posts to the retired admin places editor")]
fn the_client_posts_to_the_retired_admin_places_editor(world: &mut ApiWorld) {
    send(
        world,
        ApiRequest {
            method: Method::POST,
            path: "/api/admin/places",
            payload: Some(json!({ "name": "Old town" })),
            raw_json: None,
        },
    );
}

#[when("the client creates a task with a malformed body")]
fn the_client_creates_a_task_with_a_malformed_body(world: &mut ApiWorld) {
    send(
        world,
        ApiRequest {
            method: Method::POST,
            path: "/api/tasks",
            payload: None,
            raw_json: Some("{not json"),
        },
    );
}

#[when("the client requests an unknown API path")]
fn the_client_requests_an_unknown_api_path(world: &mut ApiWorld) {
    send(
        world,
        ApiRequest {
            method: Method::GET,
            path: "/api/unknown",
            payload: None,
            raw_json: None,
        },
    );
}

#[then("the response status is 200")]
fn the_response_status_is_200(world: &mut ApiWorld) {
    assert_eq!(world.last_status, Some(200));
}

#[then("the response status is 400")]
fn the_response_status_is_400(world: &mut ApiWorld) {
    assert_eq!(world.last_status, Some(400));
}

#[then("the response status is 410")]
fn the_response_status_is_410(world: &mut ApiWorld) {
    assert_eq!(world.last_status, Some(410));
}

#[then("the response status is 404")]
fn the_response_status_is_404(world: &mut ApiWorld) {
    assert_eq!(world.last_status, Some(404));
}

#[then("the error body has code {code}")]
fn the_error_body_has_code(world: &mut ApiWorld, code: String) {
    let body = body(world);
    assert_eq!(body.get("code").and_then(Value::as_str), Some(code.as_str()));
    assert_eq!(
        body.get("traceId").and_then(Value::as_str),
        world.last_trace_id.as_deref()
    );
}

#[then("the body reports status ok")]
fn the_body_reports_status_ok(world: &mut ApiWorld) {
    assert_eq!(body(world), &json!({ "status": "ok" }));
}

#[then("the response is unauthorised with a trace id")]
fn the_response_is_unauthorised_with_a_trace_id(world: &mut ApiWorld) {
    assert_eq!(world.last_status, Some(401));
    let trace_id = world.last_trace_id.as_deref().expect("trace id header");
    assert_eq!(
        body(world).get("traceId").and_then(Value::as_str),
        Some(trace_id)
    );
}

#[then("the body lists the fixture trip")]
fn the_body_lists_the_fixture_trip(world: &mut ApiWorld) {
    let expected = FIXTURE_TRIP_ID.to_string();
    let trips = body(world).as_array().expect("trip array");
    assert!(
        trips
            .iter()
            .any(|trip| trip.get("id").and_then(Value::as_str) == Some(expected.as_str())),
        "fixture trip missing from {trips:?}"
    );
}

#[then("the error names the groupId field")]
fn the_error_names_the_group_id_field(world: &mut ApiWorld) {
    let body = body(world);
    assert_eq!(
        body.get("error").and_then(Value::as_str),
        Some("groupId is required")
    );
    assert_eq!(
        body.pointer("/details/field").and_then(Value::as_str),
        Some("groupId")
    );
}

#[then("the error says the endpoint is no longer available")]
fn the_error_says_the_endpoint_is_no_longer_available(world: &mut ApiWorld) {
    assert_eq!(
        body(world),
        &json!({ "error": "This endpoint is no longer available." })
    );
}

#[scenario(
    path = "tests/features/trip_planning.feature",
    name = "Ping answers without a session"
)]
fn ping_answers_without_a_session(world: ApiWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/trip_planning.feature",
    name = "Signed-out clients are rejected with a trace id"
)]
fn signed_out_clients_are_rejected_with_a_trace_id(world: ApiWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/trip_planning.feature",
    name = "Signed-in travellers see their trips"
)]
fn signed_in_travellers_see_their_trips(world: ApiWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/trip_planning.feature",
    name = "Task creation without a group is rejected"
)]
fn task_creation_without_a_group_is_rejected(world: ApiWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/trip_planning.feature",
    name = "Retired admin editors are gone"
)]
fn retired_admin_editors_are_gone(world: ApiWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/trip_planning.feature",
    name = "Malformed request bodies get a JSON error"
)]
fn malformed_request_bodies_get_a_json_error(world: ApiWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/trip_planning.feature",
    name = "Unknown API paths get a JSON not found"
)]
fn unknown_api_paths_get_a_json_not_found(world: ApiWorld) {
    drop(world);
}
