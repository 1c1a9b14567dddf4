//! Login credentials checked against traveller profiles.
//!
//! Inbound payloads are parsed into [`LoginCredentials`] before a handler talks
//! to the [`LoginService`](crate::domain::ports::LoginService) port.

use zeroize::Zeroizing;

/// Reasons a login payload is rejected before authentication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    #[error("email is required")]
    MissingEmail,
    /// Email did not look like an address.
    #[error("email must be a valid address")]
    MalformedEmail,
    /// Password was empty.
    #[error("password is required")]
    MissingPassword,
}

impl LoginValidationError {
    /// Name of the offending request field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingEmail | Self::MalformedEmail => "email",
            Self::MissingPassword => "password",
        }
    }
}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is trimmed, lower-cased and contains one `@` with text on both
///   sides.
/// - `password` is non-empty; whitespace is preserved.
///
/// # Examples
/// ```
/// use tripboard::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" Ada@Example.com ", "s3cret")
///     .expect("valid credentials");
/// assert_eq!(creds.email(), "ada@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = email.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::MissingEmail);
        }
        match normalized.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {}
            _ => return Err(LoginValidationError::MalformedEmail),
        }
        if password.is_empty() {
            return Err(LoginValidationError::MissingPassword);
        }

        Ok(Self {
            email: normalized.to_lowercase(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Normalised email used for profile lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password exactly as supplied.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
