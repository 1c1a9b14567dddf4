//! Resource API modules: one per entity, each wrapping a repository port.
//!
//! Every operation validates its input first and answers with an
//! [`Outcome`](crate::domain::outcome::Outcome) without touching the port when
//! the input is unusable. Port failures are rewrapped so adapter errors never
//! reach callers:
//!
//! - a lost connection becomes `ServiceUnavailable`;
//! - query and constraint failures become client-correctable `err`s naming
//!   the operation;
//! - absent entities become `NotFound`.

mod activities;
mod admin;
mod groups;
mod images;
mod itinerary;
mod surveys;
mod tasks;
mod trips;

pub use activities::ActivitiesResource;
pub use admin::AdminResource;
pub use groups::GroupsResource;
pub use images::ImagesResource;
pub use itinerary::ItineraryResource;
pub use surveys::SurveysResource;
pub use tasks::TasksResource;
pub use trips::TripsResource;

use tracing::warn;

use super::Error;
use super::ports::BackendError;

/// Rewrap a port failure for `operation`, e.g. `"create task"`.
fn backend_failure(operation: &'static str) -> impl FnOnce(BackendError) -> Error {
    move |error| {
        warn!(operation, error = %error, "backend call failed");
        match error {
            BackendError::Connection { .. } => {
                Error::service_unavailable(format!("{operation} failed: backend unavailable"))
            }
            BackendError::Query { .. } => Error::invalid_request(format!("{operation} failed")),
            BackendError::Constraint { message } => {
                Error::invalid_request(format!("{operation} failed: {message}"))
            }
        }
    }
}

fn not_found(entity: &'static str) -> Error {
    Error::not_found(format!("{entity} not found"))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(
        BackendError::connection("pool timed out"),
        ErrorCode::ServiceUnavailable,
        "list trips failed: backend unavailable"
    )]
    #[case(
        BackendError::query("relation \"trips\" does not exist"),
        ErrorCode::InvalidRequest,
        "list trips failed"
    )]
    #[case(
        BackendError::constraint("trip already exists"),
        ErrorCode::InvalidRequest,
        "list trips failed: trip already exists"
    )]
    fn backend_failures_are_rewrapped(
        #[case] error: BackendError,
        #[case] code: ErrorCode,
        #[case] message: &str,
    ) {
        let mapped = backend_failure("list trips")(error);
        assert_eq!(mapped.code(), code);
        assert_eq!(mapped.message(), message);
    }
}
