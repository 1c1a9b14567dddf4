//! Test helpers for inbound HTTP components.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;

/// Session middleware with a fresh key and an insecure `session` cookie so
/// plain-HTTP test requests carry it.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// The `session` cookie set by `response`, if any.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
}

/// Route used by handler tests to start a session as the fixture traveller.
pub const SIGN_IN_PATH: &str = "/test/sign-in";

/// Handler behind [`SIGN_IN_PATH`].
pub async fn sign_in_fixture_user(
    session: crate::inbound::http::session::SessionContext,
) -> Result<actix_web::HttpResponse, crate::domain::Error> {
    let user = crate::domain::UserId::from_uuid(crate::domain::ports::FIXTURE_USER_ID);
    session.persist_user(&user)?;
    Ok(actix_web::HttpResponse::Ok().finish())
}

/// Sign in through [`SIGN_IN_PATH`] and return the session cookie.
pub async fn sign_in<S, B>(app: &S) -> Cookie<'static>
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse<B>,
            Error = actix_web::Error,
        >,
{
    let request = actix_web::test::TestRequest::get()
        .uri(SIGN_IN_PATH)
        .to_request();
    let response = actix_web::test::call_service(app, request).await;
    session_cookie(&response).expect("sign-in sets a session cookie")
}

/// Build a test service with fixture state, a cookie session and the
/// sign-in helper route, then register the given handlers under `/api`.
macro_rules! fixture_app {
    (state: $state:expr; $($service:expr),+ $(,)?) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .wrap($crate::inbound::http::test_utils::test_session_middleware())
                .route(
                    $crate::inbound::http::test_utils::SIGN_IN_PATH,
                    actix_web::web::get()
                        .to($crate::inbound::http::test_utils::sign_in_fixture_user),
                )
                .service(actix_web::web::scope("/api")$(.service($service))+),
        )
        .await
    };
    ($($service:expr),+ $(,)?) => {
        $crate::inbound::http::test_utils::fixture_app!(
            state: $crate::inbound::http::state::HttpState::fixtures();
            $($service),+
        )
    };
}
pub(crate) use fixture_app;
