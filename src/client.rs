use std::sync::Arc;

use gradeview_config::PortalConfig;
use gradeview_core::PortalError;
use gradeview_models::StudentProfile;
use reqwest::{RequestBuilder, Response};
use tracing::debug;

/// Shared transport for all portal calls.
///
/// Cheap to clone and safe to share between tasks. It carries no session
/// state: there is no cookie store, and each authenticated request attaches
/// its token explicitly.
#[derive(Clone, Debug)]
pub struct PortalClient {
    http: reqwest::Client,
    config: Arc<PortalConfig>,
}

impl PortalClient {
    /// Builds a client for the given portal configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Transport`] if the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialize).
    pub fn new(config: PortalConfig) -> Result<Self, PortalError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            config: Arc::new(config),
        })
    }

    pub fn from_env() -> Result<Self, PortalError> {
        Self::new(PortalConfig::from_env())
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Absolute URL of the student's picture, if the profile has one.
    pub fn profile_image_url(&self, profile: &StudentProfile) -> Option<String> {
        profile
            .has_image()
            .then(|| self.config.resolve(profile.image_path.trim()))
    }

    /// Sends a request once. Connection failures and non-2xx statuses are
    /// transport failures.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, PortalError> {
        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "Portal responded");
        Ok(response.error_for_status()?)
    }
}
