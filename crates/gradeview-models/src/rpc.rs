//! Parameter objects of the portal's RPC methods.
//!
//! These are JSON-encoded into the `param2` field of the RPC envelope. Field
//! names must match what the portal expects exactly.

use serde::Serialize;

use crate::ids::StudentUuid;

/// Parameter of `Portal.General.GetStudentPortalData`; the portal resolves the
/// student from the session, so the user id is always empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StudentPortalDataParams {
    #[serde(rename = "UserID")]
    pub user_id: String,
}

/// Parameter of `Portal.Results.GetAllResults`.
#[derive(Debug, Clone, Serialize)]
pub struct AllResultsParams<'a> {
    #[serde(rename = "UUID")]
    pub uuid: &'a StudentUuid,
}
