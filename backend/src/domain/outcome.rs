//! Uniform success/failure values for data operations.
//!
//! Every resource operation returns an [`Outcome`]: `Ok(data)` on success or
//! `Err(Error)` carrying a message and optional details. [`ok`], [`err`] and
//! [`try_catch`] are the only constructors callers need; none of them
//! retries. [`Envelope`] is the JSON form of an outcome,
//! `{ "success": true, "data": .. }` or
//! `{ "success": false, "error": "..", "details": .. }`.

use std::any::Any;
use std::fmt::Display;
use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};

use futures_util::FutureExt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::error;

use super::Error;

/// Result of a data operation.
pub type Outcome<T> = Result<T, Error>;

const FALLBACK_FAILURE: &str = "request failed";
const FALLBACK_PANIC: &str = "unexpected failure";

/// Wrap `data` as a successful outcome.
///
/// # Examples
/// ```
/// use tripboard::domain::outcome::ok;
///
/// let outcome = ok(3);
/// assert!(outcome.is_ok());
/// ```
pub fn ok<T>(data: T) -> Outcome<T> {
    Ok(data)
}

/// Build a client-correctable failure carrying `message`.
///
/// # Examples
/// ```
/// use tripboard::domain::ErrorCode;
/// use tripboard::domain::outcome::{Outcome, err};
///
/// let outcome: Outcome<()> = err("title is required");
/// let error = outcome.expect_err("failure");
/// assert_eq!(error.code(), ErrorCode::InvalidRequest);
/// assert_eq!(error.message(), "title is required");
/// ```
pub fn err<T>(message: impl Into<String>) -> Outcome<T> {
    Err(Error::invalid_request(non_blank(message.into(), FALLBACK_FAILURE)))
}

/// Build a client-correctable failure carrying `message` and `details`.
pub fn err_with_details<T>(message: impl Into<String>, details: Value) -> Outcome<T> {
    err(message).map_err(|error| error.with_details(details))
}

/// Run `f`, turning its error or a panic into a failure.
///
/// `Ok(v)` becomes `ok(v)`; `Err(e)` becomes `err(e.to_string())`; a panic
/// becomes `err` with the panic message.
///
/// # Examples
/// ```
/// use tripboard::domain::outcome::try_catch;
///
/// let parsed = try_catch(|| "42".parse::<u32>());
/// assert_eq!(parsed.ok(), Some(42));
///
/// let failed = try_catch(|| "x".parse::<u32>());
/// assert!(failed.is_err());
/// ```
pub fn try_catch<T, E, F>(f: F) -> Outcome<T>
where
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => settle(result),
        Err(payload) => panicked(payload.as_ref()),
    }
}

/// Await `fut`, turning its error or a panic into a failure.
///
/// The asynchronous counterpart of [`try_catch`].
pub async fn try_catch_async<T, E, Fut>(fut: Fut) -> Outcome<T>
where
    E: Display,
    Fut: Future<Output = Result<T, E>>,
{
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(result) => settle(result),
        Err(payload) => panicked(payload.as_ref()),
    }
}

fn settle<T, E: Display>(result: Result<T, E>) -> Outcome<T> {
    match result {
        Ok(data) => ok(data),
        Err(error) => err(error.to_string()),
    }
}

fn panicked<T>(payload: &(dyn Any + Send)) -> Outcome<T> {
    let message = payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| FALLBACK_PANIC.to_owned());
    error!(panic = %message, "operation panicked");
    err(message)
}

fn non_blank(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_owned()
    } else {
        message
    }
}

/// Wire form of an [`Outcome`].
///
/// Exactly one branch is populated: `data` on success, `error` (and optional
/// `details`) on failure.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use tripboard::domain::outcome::{Envelope, ok};
///
/// let envelope = Envelope::from(ok(vec!["Lisbon"]));
/// assert!(envelope.is_success());
/// assert_eq!(
///     serde_json::to_value(&envelope).expect("serialise"),
///     json!({ "success": true, "data": ["Lisbon"] }),
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    /// The operation succeeded.
    Success {
        /// Payload returned by the operation.
        data: T,
    },
    /// The operation failed.
    Failure {
        /// Human-readable failure message.
        error: String,
        /// Optional structured context.
        details: Option<Value>,
    },
}

impl<T> Envelope<T> {
    /// Whether this is the success branch.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Convert back into an [`Outcome`].
    ///
    /// Failures come back as client-correctable errors; the original error
    /// code is not part of the wire form.
    pub fn into_outcome(self) -> Outcome<T> {
        match self {
            Self::Success { data } => ok(data),
            Self::Failure { error, details } => match details {
                Some(details) => err_with_details(error, details),
                None => err(error),
            },
        }
    }
}

impl<T> From<Outcome<T>> for Envelope<T> {
    fn from(value: Outcome<T>) -> Self {
        match value {
            Ok(data) => Self::Success { data },
            Err(error) => Self::Failure {
                error: error.message().to_owned(),
                details: error.details().cloned(),
            },
        }
    }
}

impl<T> From<Envelope<T>> for Outcome<T> {
    fn from(value: Envelope<T>) -> Self {
        value.into_outcome()
    }
}

/// Reasons a decoded envelope violates the one-branch invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    /// `success` was true but no `data` was present.
    #[error("successful envelope is missing data")]
    MissingData,
    /// `success` was false but no usable `error` was present.
    #[error("failed envelope is missing an error message")]
    MissingError,
    /// Both branches were populated.
    #[error("envelope carries both data and an error")]
    BothBranches,
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a Value>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EnvelopeDto<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
    details: Option<Value>,
}

impl<T> TryFrom<EnvelopeDto<T>> for Envelope<T> {
    type Error = EnvelopeError;

    fn try_from(value: EnvelopeDto<T>) -> Result<Self, Self::Error> {
        let EnvelopeDto {
            success,
            data,
            error,
            details,
        } = value;
        if data.is_some() && error.is_some() {
            return Err(EnvelopeError::BothBranches);
        }
        if success {
            return data
                .map(|data| Self::Success { data })
                .ok_or(EnvelopeError::MissingData);
        }
        match error {
            Some(error) if !error.trim().is_empty() => Ok(Self::Failure { error, details }),
            _ => Err(EnvelopeError::MissingError),
        }
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let view = match self {
            Self::Success { data } => EnvelopeRef {
                success: true,
                data: Some(data),
                error: None,
                details: None,
            },
            Self::Failure { error, details } => EnvelopeRef {
                success: false,
                data: None,
                error: Some(error.as_str()),
                details: details.as_ref(),
            },
        };
        view.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Envelope<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dto = EnvelopeDto::<T>::deserialize(deserializer)?;
        Self::try_from(dto).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    //! Behavioural coverage for the outcome helpers and their wire form.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(0)]
    #[case(7)]
    fn ok_is_success(#[case] value: u32) {
        let envelope = Envelope::from(ok(value));
        assert!(envelope.is_success());
    }

    #[rstest]
    #[case("title is required")]
    #[case("backend offline")]
    fn err_is_failure(#[case] message: &str) {
        let outcome: Outcome<u32> = err(message);
        let envelope = Envelope::from(outcome);
        assert!(!envelope.is_success());
    }

    #[rstest]
    fn err_replaces_blank_messages() {
        let error = err::<()>("  ").expect_err("failure");
        assert_eq!(error.message(), FALLBACK_FAILURE);
    }

    #[rstest]
    fn err_with_details_keeps_details() {
        let details = json!({"field": "groupId", "code": "missing_field"});
        let error = err_with_details::<()>("groupId is required", details.clone())
            .expect_err("failure");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.details(), Some(&details));
    }

    #[rstest]
    fn try_catch_wraps_success() {
        assert_eq!(try_catch(|| Ok::<_, String>(5)).ok(), Some(5));
    }

    #[rstest]
    fn try_catch_wraps_error_message() {
        let error = try_catch(|| Err::<u32, _>("no such trip")).expect_err("failure");
        assert_eq!(error.message(), "no such trip");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    fn try_catch_captures_panic_message() {
        let error = try_catch::<u32, String, _>(|| panic!("exploded")).expect_err("failure");
        assert_eq!(error.message(), "exploded");
    }

    #[rstest]
    fn try_catch_captures_formatted_panic_message() {
        let trip = "Lisbon";
        let error =
            try_catch::<u32, String, _>(|| panic!("lost {trip}")).expect_err("failure");
        assert_eq!(error.message(), "lost Lisbon");
    }

    #[rstest]
    #[tokio::test]
    async fn try_catch_async_wraps_success_and_error() {
        let success = try_catch_async(async { Ok::<_, String>("ok") }).await;
        assert_eq!(success.ok(), Some("ok"));

        let failure = try_catch_async(async { Err::<(), _>("timed out") }).await;
        assert_eq!(failure.expect_err("failure").message(), "timed out");
    }

    #[rstest]
    #[tokio::test]
    async fn try_catch_async_captures_panic() {
        let outcome = try_catch_async::<(), String, _>(async { panic!("async boom") }).await;
        assert_eq!(outcome.expect_err("failure").message(), "async boom");
    }

    #[rstest]
    fn failure_serialises_without_data() {
        let outcome: Outcome<u32> = err_with_details("bad", json!({"field": "title"}));
        let value = serde_json::to_value(Envelope::from(outcome)).expect("serialise");
        assert_eq!(
            value,
            json!({"success": false, "error": "bad", "details": {"field": "title"}})
        );
    }

    #[rstest]
    #[case(json!({"success": true, "data": 1, "error": "bad"}), EnvelopeError::BothBranches)]
    #[case(json!({"success": true}), EnvelopeError::MissingData)]
    #[case(json!({"success": false}), EnvelopeError::MissingError)]
    #[case(json!({"success": false, "error": " "}), EnvelopeError::MissingError)]
    fn inconsistent_envelopes_are_rejected(
        #[case] payload: Value,
        #[case] expected: EnvelopeError,
    ) {
        let error = serde_json::from_value::<Envelope<u32>>(payload).expect_err("rejected");
        assert!(error.to_string().contains(&expected.to_string()));
    }

    #[rstest]
    fn failure_envelope_decodes_into_outcome() {
        let envelope: Envelope<u32> =
            serde_json::from_value(json!({"success": false, "error": "trip not found"}))
                .expect("decode");
        let error = Outcome::from(envelope).expect_err("failure");
        assert_eq!(error.message(), "trip not found");
    }
}
