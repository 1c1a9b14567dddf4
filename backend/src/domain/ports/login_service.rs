//! Driving port for login.
//!
//! Inbound adapters authenticate credentials through this port without
//! knowing how profiles are stored, so handler tests can swap in a double.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, UserId};

use super::fixtures::fixture_user;

/// Email used by [`FixtureLoginService`].
pub const FIXTURE_EMAIL: &str = "ada@example.com";
/// Password used by [`FixtureLoginService`].
pub const FIXTURE_PASSWORD: &str = "password";

/// Authentication use-case.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    ///
    /// Unknown emails and wrong passwords are indistinguishable
    /// `Unauthorized` errors.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}

/// In-memory authenticator accepting only the fixture traveller.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        if credentials.email() == FIXTURE_EMAIL && credentials.password() == FIXTURE_PASSWORD {
            Ok(fixture_user())
        } else {
            Err(Error::unauthorized("invalid credentials"))
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::FIXTURE_USER_ID;
    use rstest::rstest;

    #[rstest]
    #[case("ada@example.com", "password", true)]
    #[case("ADA@example.com", "password", true)]
    #[case("ada@example.com", "wrong", false)]
    #[case("bob@example.com", "password", false)]
    #[tokio::test]
    async fn fixture_accepts_only_the_known_traveller(
        #[case] email: &str,
        #[case] password: &str,
        #[case] should_succeed: bool,
    ) {
        let creds = LoginCredentials::try_from_parts(email, password).expect("credentials shape");
        let result = FixtureLoginService.authenticate(&creds).await;
        match (should_succeed, result) {
            (true, Ok(id)) => assert_eq!(id.as_uuid(), &FIXTURE_USER_ID),
            (false, Err(err)) => assert_eq!(err.code(), ErrorCode::Unauthorized),
            (true, Err(err)) => panic!("expected success, got error: {err:?}"),
            (false, Ok(id)) => panic!("expected failure, got success: {id}"),
        }
    }
}
