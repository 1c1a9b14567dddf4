//! Helpers turning resource outcomes into HTTP responses.

use actix_web::HttpResponse;
use serde::Serialize;

use crate::domain::Outcome;
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::private_no_cache_header;

/// `200` with a private, non-cacheable JSON body.
pub(crate) fn ok_json<T: Serialize>(outcome: Outcome<T>) -> ApiResult<HttpResponse> {
    let value = outcome?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(value))
}

/// `201` with the created entity as JSON.
pub(crate) fn created_json<T: Serialize>(outcome: Outcome<T>) -> ApiResult<HttpResponse> {
    let value = outcome?;
    Ok(HttpResponse::Created().json(value))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::http::StatusCode;
    use rstest::rstest;

    use crate::domain::ErrorCode;
    use crate::domain::outcome::{err, ok};

    #[rstest]
    fn success_is_private() {
        let response = ok_json(ok(vec![1, 2])).expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("cache-control"));
    }

    #[rstest]
    fn creation_uses_201() {
        let response = created_json(ok("trip")).expect("response");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[rstest]
    fn failures_pass_through() {
        let error = ok_json::<u8>(err("name is required")).expect_err("failure");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }
}
