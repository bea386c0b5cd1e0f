use gradeview_core::PortalError;
use gradeview_models::{AcademicYearResult, Credentials, StudentProfile};
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::client::PortalClient;
use crate::modules::auth::service::AuthService;
use crate::modules::results::render::render_results;
use crate::modules::results::service::ResultsService;
use crate::modules::students::service::StudentService;

/// Everything produced by one report run.
#[derive(Debug, Clone)]
pub struct StudentReport {
    pub profile: StudentProfile,
    pub results: Vec<AcademicYearResult>,
    /// The rendered report, ready to send.
    pub text: String,
}

impl StudentReport {
    /// Primary variant of the student's name, if the portal sent one.
    pub fn student_name(&self) -> Option<&str> {
        self.profile.display_name().ok()
    }
}

pub struct ReportService;

impl ReportService {
    /// Logs in, fetches profile and results, and renders the report.
    ///
    /// Each run opens a fresh session; nothing is reused across calls. The
    /// first failing step aborts the run and its error is returned unchanged.
    pub async fn generate_report(
        client: &PortalClient,
        credentials: &Credentials,
    ) -> Result<StudentReport, PortalError> {
        let span = info_span!("report.generate", request_id = %Uuid::new_v4());

        async move {
            let token = AuthService::login(client, credentials).await?;
            let profile = StudentService::fetch_profile(client, &token).await?;
            let results = ResultsService::fetch_results(client, &token, &profile.uuid).await?;
            let text = render_results(&results)?;

            info!(years = results.len(), "Report generated");

            Ok(StudentReport {
                profile,
                results,
                text,
            })
        }
        .instrument(span)
        .await
    }
}
