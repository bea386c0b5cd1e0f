use gradeview_core::PortalError;
use gradeview_models::{SessionToken, StudentProfile};
use tracing::{debug, instrument};

use crate::client::PortalClient;
use crate::rpc::RpcEnvelope;

pub struct StudentService;

impl StudentService {
    /// Fetches the logged-in student's profile.
    ///
    /// The portal answers with a JSON array; its first element is the profile.
    ///
    /// # Errors
    ///
    /// - [`PortalError::Transport`] on network or HTTP failure
    /// - [`PortalError::MalformedResponse`] when the body does not decode or
    ///   the array is empty
    #[instrument(skip_all)]
    pub async fn fetch_profile(
        client: &PortalClient,
        token: &SessionToken,
    ) -> Result<StudentProfile, PortalError> {
        let envelope = RpcEnvelope::student_portal_data()?;
        let profiles: Vec<StudentProfile> = client.invoke(token, &envelope).await?;

        let count = profiles.len();
        let profile = profiles
            .into_iter()
            .next()
            .ok_or_else(|| PortalError::malformed_response("profile response is an empty array"))?;

        if count > 1 {
            debug!(count, "Profile response has extra entries, using the first");
        }
        debug!(student = %profile.uuid, "Profile fetched");

        Ok(profile)
    }
}
