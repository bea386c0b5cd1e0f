//! Session cookie extraction and rendering.

use gradeview_core::PortalError;

use crate::session::SessionToken;

/// Finds the session token among the cookies of a login response.
///
/// The first cookie named `cookie_name` with a non-empty value wins. The
/// portal gives no other signal for rejected credentials, so a missing or
/// empty cookie is reported as [`PortalError::InvalidCredentials`].
///
/// # Arguments
///
/// * `cookies` - `(name, value)` pairs in response order
/// * `cookie_name` - The configured session cookie name
pub fn session_from_cookies<I, N, V>(cookies: I, cookie_name: &str) -> Result<SessionToken, PortalError>
where
    I: IntoIterator<Item = (N, V)>,
    N: AsRef<str>,
    V: AsRef<str>,
{
    cookies
        .into_iter()
        .filter(|(name, _)| name.as_ref() == cookie_name)
        .find_map(|(_, value)| SessionToken::new(value.as_ref()))
        .ok_or(PortalError::InvalidCredentials)
}

/// Renders the `Cookie` request header value carrying the session token.
pub fn cookie_header(cookie_name: &str, token: &SessionToken) -> String {
    format!("{}={}", cookie_name, token.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: &str = "PortalStudentUserID";

    #[test]
    fn test_finds_named_cookie() {
        let cookies = vec![("ASP.NET_SessionId", "s1"), (NAME, "abc123")];
        let token = session_from_cookies(cookies, NAME).unwrap();
        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn test_missing_cookie_is_invalid_credentials() {
        let cookies = vec![("ASP.NET_SessionId", "s1")];
        let err = session_from_cookies(cookies, NAME).unwrap_err();
        assert!(matches!(err, PortalError::InvalidCredentials));
    }

    #[test]
    fn test_empty_value_is_invalid_credentials() {
        let cookies = vec![(NAME, "")];
        assert!(matches!(
            session_from_cookies(cookies, NAME),
            Err(PortalError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_skips_empty_value_before_populated_one() {
        let cookies = vec![(NAME.to_string(), String::new()), (NAME.to_string(), "v2".to_string())];
        assert_eq!(session_from_cookies(cookies, NAME).unwrap().as_str(), "v2");
    }

    #[test]
    fn test_name_match_is_exact() {
        let cookies = vec![("portalstudentuserid", "abc")];
        assert!(session_from_cookies(cookies, NAME).is_err());
    }

    #[test]
    fn test_cookie_header() {
        let token = SessionToken::new("abc123").unwrap();
        assert_eq!(cookie_header(NAME, &token), "PortalStudentUserID=abc123");
    }
}
