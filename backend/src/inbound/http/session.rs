//! Cookie-session access for handlers.
//!
//! [`SessionContext`] hides `actix-session` behind the few operations the
//! auth handlers need: remember a traveller, look them up, forget them.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";

/// Extractor wrapping the Actix session.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store the signed-in traveller, rotating the session id first.
    pub fn persist_user(&self, user_id: &UserId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, user_id.as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Traveller id stored in the cookie, if any.
    ///
    /// A cookie holding something other than a UUID counts as signed out.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        let raw = self
            .0
            .get::<String>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(raw.and_then(|raw| match UserId::new(raw) {
            Ok(id) => Some(id),
            Err(error) => {
                warn!(%error, "invalid user id in session cookie");
                None
            }
        }))
    }

    /// Signed-in traveller or `401 login required`.
    pub fn require_user_id(&self) -> Result<UserId, Error> {
        self.user_id()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Drop the session; the response expires the cookie.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};

    const TRAVELLER: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    async fn set_user(session: SessionContext) -> Result<HttpResponse, Error> {
        let id = UserId::new(TRAVELLER).expect("fixture id");
        session.persist_user(&id)?;
        Ok(HttpResponse::Ok().finish())
    }

    async fn whoami(session: SessionContext) -> Result<HttpResponse, Error> {
        let id = session.require_user_id()?;
        Ok(HttpResponse::Ok().body(id.to_string()))
    }

    async fn sign_out(session: SessionContext) -> HttpResponse {
        session.clear();
        HttpResponse::NoContent().finish()
    }

    async fn set_garbage(session: Session) -> HttpResponse {
        session
            .insert(USER_ID_KEY, "not-a-uuid")
            .expect("set invalid user id");
        HttpResponse::Ok().finish()
    }

    macro_rules! session_app {
        () => {
            test::init_service(
                App::new()
                    .wrap(test_session_middleware())
                    .route("/set", web::get().to(set_user))
                    .route("/set-garbage", web::get().to(set_garbage))
                    .route("/whoami", web::get().to(whoami))
                    .route("/sign-out", web::get().to(sign_out)),
            )
            .await
        };
    }

    fn get(uri: &str, cookie: Option<Cookie<'static>>) -> actix_http::Request {
        let request = test::TestRequest::get().uri(uri);
        match cookie {
            Some(cookie) => request.cookie(cookie).to_request(),
            None => request.to_request(),
        }
    }

    #[actix_web::test]
    async fn stored_user_round_trips() {
        let app = session_app!();
        let set = test::call_service(&app, get("/set", None)).await;
        let cookie = session_cookie(&set).expect("session cookie set");

        let res = test::call_service(&app, get("/whoami", Some(cookie))).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, TRAVELLER);
    }

    #[actix_web::test]
    async fn missing_user_is_unauthorised() {
        let app = session_app!();
        let res = test::call_service(&app, get("/whoami", None)).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn tampered_user_id_counts_as_signed_out() {
        let app = session_app!();
        let set = test::call_service(&app, get("/set-garbage", None)).await;
        let cookie = session_cookie(&set).expect("session cookie set");

        let res = test::call_service(&app, get("/whoami", Some(cookie))).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn clearing_expires_the_cookie() {
        let app = session_app!();
        let set = test::call_service(&app, get("/set", None)).await;
        let cookie = session_cookie(&set).expect("session cookie set");

        let res = test::call_service(&app, get("/sign-out", Some(cookie))).await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        let removal = session_cookie(&res).expect("removal cookie");
        assert_eq!(removal.value(), "");
    }
}
