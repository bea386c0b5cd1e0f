//! Login credentials and the login form body.

use serde::Serialize;
use std::fmt;
use validator::Validate;

/// Credentials exchanged once for a session token.
///
/// The engine sends whatever it is given; callers run [`Validate::validate`]
/// before logging in to catch obviously wrong input early.
#[derive(Clone, Validate)]
pub struct Credentials {
    /// Egyptian national identifier, 14 digits.
    #[validate(length(equal = 14, message = "national ID must be exactly 14 characters"))]
    pub national_id: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

impl Credentials {
    /// Builds credentials, trimming surrounding whitespace from both fields.
    pub fn new(national_id: impl AsRef<str>, password: impl AsRef<str>) -> Self {
        Self {
            national_id: national_id.as_ref().trim().to_string(),
            password: password.as_ref().trim().to_string(),
        }
    }

    pub fn login_form(&self) -> LoginForm<'_> {
        LoginForm {
            user_name: &self.national_id,
            password: &self.password,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("national_id", &self.national_id)
            .field("password", &"***")
            .finish()
    }
}

/// Form body of the login call.
#[derive(Debug, Serialize)]
pub struct LoginForm<'a> {
    #[serde(rename = "UserName")]
    pub user_name: &'a str,
    #[serde(rename = "Password")]
    pub password: &'a str,
}
