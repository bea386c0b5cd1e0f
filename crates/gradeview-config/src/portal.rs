//! Remote portal configuration.
//!
//! # Environment Variables
//!
//! - `PORTAL_BASE_URL`: Scheme and host of the portal (default: `http://stda.minia.edu.eg`)
//! - `PORTAL_LOGIN_PATH`: Login endpoint path (default: `/Portallogin`)
//! - `PORTAL_RPC_PATH`: Generic RPC endpoint path (default: `/PortalgetJCI`)
//! - `PORTAL_SESSION_COOKIE`: Name of the cookie carrying the session token
//!   (default: `PortalStudentUserID`)
//! - `PORTAL_USER_AGENT`: User agent sent with every request (default: `gradeview/<version>`)
//! - `PORTAL_TIMEOUT_SECS`: Per-request timeout in seconds (default: unset, no timeout)

use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://stda.minia.edu.eg";
pub const DEFAULT_LOGIN_PATH: &str = "/Portallogin";
pub const DEFAULT_RPC_PATH: &str = "/PortalgetJCI";
pub const DEFAULT_SESSION_COOKIE: &str = "PortalStudentUserID";

/// Where and how to reach the student portal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalConfig {
    /// Scheme and host, without a trailing slash.
    pub base_url: String,
    pub login_path: String,
    pub rpc_path: String,
    /// Cookie set by a successful login.
    pub session_cookie: String,
    pub user_agent: String,
    /// `None` leaves the transport's default in place.
    pub request_timeout: Option<Duration>,
}

impl PortalConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            base_url: var("PORTAL_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            login_path: var("PORTAL_LOGIN_PATH").unwrap_or(defaults.login_path),
            rpc_path: var("PORTAL_RPC_PATH").unwrap_or(defaults.rpc_path),
            session_cookie: var("PORTAL_SESSION_COOKIE").unwrap_or(defaults.session_cookie),
            user_agent: var("PORTAL_USER_AGENT").unwrap_or(defaults.user_agent),
            request_timeout: var("PORTAL_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }

    /// Points the configuration at another host, keeping everything else.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Resolves a portal-relative path (e.g. a profile `ImagePath`) against the base URL.
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub fn login_url(&self) -> String {
        self.resolve(&self.login_path)
    }

    pub fn rpc_url(&self) -> String {
        self.resolve(&self.rpc_path)
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            login_path: DEFAULT_LOGIN_PATH.into(),
            rpc_path: DEFAULT_RPC_PATH.into(),
            session_cookie: DEFAULT_SESSION_COOKIE.into(),
            user_agent: concat!("gradeview/", env!("CARGO_PKG_VERSION")).into(),
            request_timeout: None,
        }
    }
}
