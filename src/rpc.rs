//! The portal's generic RPC envelope.
//!
//! Every authenticated call goes to one endpoint as a form post with three
//! fields:
//!
//! | Field    | Content |
//! |----------|---------|
//! | `param0` | Target namespace, e.g. `Portal.Results` |
//! | `param1` | Method name, e.g. `GetAllResults` |
//! | `param2` | The method's parameter object, JSON-encoded |
//!
//! The session cookie must accompany the request. The response is always a
//! JSON array whose element shape depends on the method.

use gradeview_auth::cookie_header;
use gradeview_core::PortalError;
use gradeview_models::{AllResultsParams, SessionToken, StudentPortalDataParams, StudentUuid};
use reqwest::RequestBuilder;
use reqwest::header::COOKIE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{Instrument, debug, info_span};

use crate::client::PortalClient;

pub const GENERAL_NAMESPACE: &str = "Portal.General";
pub const RESULTS_NAMESPACE: &str = "Portal.Results";
pub const GET_STUDENT_PORTAL_DATA: &str = "GetStudentPortalData";
pub const GET_ALL_RESULTS: &str = "GetAllResults";

/// One RPC invocation: namespace, method, and the encoded parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcEnvelope {
    namespace: String,
    method: String,
    param: String,
}

impl RpcEnvelope {
    /// Builds an envelope, JSON-encoding `param`.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::InvalidRequest`] if `param` cannot be encoded.
    pub fn new<P>(
        namespace: impl Into<String>,
        method: impl Into<String>,
        param: &P,
    ) -> Result<Self, PortalError>
    where
        P: Serialize + ?Sized,
    {
        let method = method.into();
        let param = serde_json::to_string(param).map_err(|e| {
            PortalError::InvalidRequest(format!("cannot encode parameter of {method}: {e}"))
        })?;

        Ok(Self {
            namespace: namespace.into(),
            method,
            param,
        })
    }

    /// `Portal.General.GetStudentPortalData` with an empty user id.
    pub fn student_portal_data() -> Result<Self, PortalError> {
        Self::new(
            GENERAL_NAMESPACE,
            GET_STUDENT_PORTAL_DATA,
            &StudentPortalDataParams::default(),
        )
    }

    /// `Portal.Results.GetAllResults` for one student.
    pub fn all_results(uuid: &StudentUuid) -> Result<Self, PortalError> {
        Self::new(RESULTS_NAMESPACE, GET_ALL_RESULTS, &AllResultsParams { uuid })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// The JSON-encoded parameter object.
    pub fn param(&self) -> &str {
        &self.param
    }

    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("param0", self.namespace.as_str()),
            ("param1", self.method.as_str()),
            ("param2", self.param.as_str()),
        ]
    }

    /// Prepares the authenticated form post for this envelope.
    pub fn build_request(&self, client: &PortalClient, token: &SessionToken) -> RequestBuilder {
        let config = client.config();
        client
            .http()
            .post(config.rpc_url())
            .header(COOKIE, cookie_header(&config.session_cookie, token))
            .form(&self.form_fields()[..])
    }
}

impl PortalClient {
    /// Sends one RPC call and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// - [`PortalError::Transport`] on connection errors and non-2xx statuses
    /// - [`PortalError::MalformedResponse`] when the body does not decode as `T`
    pub async fn invoke<T>(&self, token: &SessionToken, envelope: &RpcEnvelope) -> Result<T, PortalError>
    where
        T: DeserializeOwned,
    {
        let span = info_span!(
            "portal.rpc",
            rpc.namespace = %envelope.namespace(),
            rpc.method = %envelope.method(),
        );

        async {
            let response = self.send(envelope.build_request(self, token)).await?;
            let body = response.bytes().await?;
            debug!(bytes = body.len(), "RPC body received");
            serde_json::from_slice(&body).map_err(|e| PortalError::decode(envelope.method(), e))
        }
        .instrument(span)
        .await
    }
}
