use gradeview_core::PortalError;
use gradeview_models::{AcademicYearResult, SessionToken, StudentUuid};
use tracing::{debug, instrument};

use crate::client::PortalClient;
use crate::rpc::RpcEnvelope;

pub struct ResultsService;

impl ResultsService {
    /// Fetches every year result of a student, in portal order.
    ///
    /// An empty list is a valid answer: the student has no results yet.
    ///
    /// # Errors
    ///
    /// - [`PortalError::Transport`] on network or HTTP failure
    /// - [`PortalError::MalformedResponse`] when the body does not decode
    #[instrument(skip_all, fields(student = %student_uuid))]
    pub async fn fetch_results(
        client: &PortalClient,
        token: &SessionToken,
        student_uuid: &StudentUuid,
    ) -> Result<Vec<AcademicYearResult>, PortalError> {
        let envelope = RpcEnvelope::all_results(student_uuid)?;
        let results: Vec<AcademicYearResult> = client.invoke(token, &envelope).await?;

        debug!(years = results.len(), "Results fetched");

        Ok(results)
    }
}
