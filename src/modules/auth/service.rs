use gradeview_auth::session_from_cookies;
use gradeview_core::PortalError;
use gradeview_models::{Credentials, SessionToken};
use tracing::{debug, instrument};

use crate::client::PortalClient;

pub struct AuthService;

impl AuthService {
    /// Exchanges credentials for a session token.
    ///
    /// Posts `UserName`/`Password` to the login endpoint once and looks for the
    /// configured session cookie in the response.
    ///
    /// # Errors
    ///
    /// - [`PortalError::Transport`] when the portal is unreachable or answers
    ///   with a non-2xx status
    /// - [`PortalError::InvalidCredentials`] when the response carries no
    ///   non-empty session cookie
    #[instrument(skip_all)]
    pub async fn login(
        client: &PortalClient,
        credentials: &Credentials,
    ) -> Result<SessionToken, PortalError> {
        let config = client.config();
        let request = client
            .http()
            .post(config.login_url())
            .form(&credentials.login_form());

        let response = client.send(request).await?;
        let cookies: Vec<(String, String)> = response
            .cookies()
            .map(|cookie| (cookie.name().to_string(), cookie.value().to_string()))
            .collect();

        debug!(cookies = cookies.len(), "Login response received");

        let token = session_from_cookies(cookies, &config.session_cookie)?;
        debug!("Session established");

        Ok(token)
    }
}
