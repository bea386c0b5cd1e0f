//! In-process stand-in for the student portal.
//!
//! Serves the login and RPC endpoints on `127.0.0.1:0` so the real `reqwest`
//! client can be exercised end to end.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Form, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use gradeview::{Credentials, PortalClient, PortalConfig};
use tokio::net::TcpListener;

pub const NATIONAL_ID: &str = "29801011234567";
pub const PASSWORD: &str = "secret";
pub const TOKEN: &str = "abc123";
pub const STUDENT_UUID: &str = "6B1F0C9E-1111-2222-3333-444455556666";

pub const PROFILE_JSON: &str = r#"[{
    "CollageID": "5",
    "ImagePath": "/Images/Students/123.jpg",
    "UUID": "6B1F0C9E-1111-2222-3333-444455556666",
    "Collage": "Engineering|الهندسة",
    "ScopeUUID": "AAAA-BBBB",
    "StdName": "Mona Ali|منى علي",
    "Year": "2023/2024",
    "ShowMessage": "",
    "ID": 987,
    "StudyYear": "3"
}]"#;

pub const RESULTS_JSON: &str = r#"[{
    "ScopeName": "Science|علوم",
    "Year": "2023",
    "ds": [{
        "GradeName": "A|أ",
        "Percent": "90",
        "Total": 900,
        "StudyYearCourses": [{
            "CourseName": "Math|رياضيات",
            "GradeName": "A|أ",
            "Max": 100,
            "Total": "95",
            "SuccessFlag": "1",
            "Parts": [{
                "DegreesType": ["Written|تحريري", "Oral|شفوي"],
                "Degrees": ["80", 15],
                "DegreesMax": "100",
                "CoursePartName": "Term 1",
                "SemasterName": "First"
            }]
        }]
    }]
}]"#;

/// One request received on the RPC endpoint.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub form: HashMap<String, String>,
    pub cookie: Option<String>,
}

struct PortalState {
    /// Session values the RPC endpoint accepts; login issues the first.
    tokens: Vec<String>,
    login_status: StatusCode,
    profile_body: Mutex<String>,
    results_body: Mutex<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

#[derive(Clone)]
pub struct MockPortal {
    pub base_url: String,
    state: Arc<PortalState>,
}

impl MockPortal {
    pub async fn start() -> Self {
        Self::start_with(TOKEN, StatusCode::OK).await
    }

    /// A portal that issues `token` as the session cookie value; an empty
    /// token makes every login look rejected.
    pub async fn start_with(token: &str, login_status: StatusCode) -> Self {
        Self::start_with_tokens(&[token], login_status).await
    }

    /// A portal that accepts any of `tokens` on the RPC endpoint.
    pub async fn start_with_tokens(tokens: &[&str], login_status: StatusCode) -> Self {
        let state = Arc::new(PortalState {
            tokens: tokens.iter().map(|token| token.to_string()).collect(),
            login_status,
            profile_body: Mutex::new(PROFILE_JSON.to_string()),
            results_body: Mutex::new(RESULTS_JSON.to_string()),
            calls: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/Portallogin", post(login))
            .route("/PortalgetJCI", post(rpc))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn client(&self) -> PortalClient {
        PortalClient::new(PortalConfig::default().with_base_url(&self.base_url)).unwrap()
    }

    pub fn set_profile_body(&self, body: &str) {
        *self.state.profile_body.lock().unwrap() = body.to_string();
    }

    pub fn set_results_body(&self, body: &str) {
        *self.state.results_body.lock().unwrap() = body.to_string();
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().unwrap().clone()
    }
}

pub fn valid_credentials() -> Credentials {
    Credentials::new(NATIONAL_ID, PASSWORD)
}

async fn login(
    State(state): State<Arc<PortalState>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    if state.login_status != StatusCode::OK {
        return state.login_status.into_response();
    }

    let accepted = form.get("UserName").map(String::as_str) == Some(NATIONAL_ID)
        && form.get("Password").map(String::as_str) == Some(PASSWORD);

    if accepted {
        let token = state.tokens.first().map(String::as_str).unwrap_or_default();
        let cookie = format!("PortalStudentUserID={token}; path=/");
        ([(header::SET_COOKIE, cookie)], "OK").into_response()
    } else {
        // The portal answers 200 with no session cookie on bad credentials.
        ([(header::SET_COOKIE, "ASP.NET_SessionId=xyz; path=/")], "OK").into_response()
    }
}

async fn rpc(
    State(state): State<Arc<PortalState>>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let cookie = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    state.calls.lock().unwrap().push(RecordedCall {
        form: form.clone(),
        cookie: cookie.clone(),
    });

    let authorized = state.tokens.iter().any(|token| {
        !token.is_empty() && cookie.as_deref() == Some(format!("PortalStudentUserID={token}").as_str())
    });
    if !authorized {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let body = match form.get("param1").map(String::as_str) {
        Some("GetStudentPortalData") => state.profile_body.lock().unwrap().clone(),
        Some("GetAllResults") => state.results_body.lock().unwrap().clone(),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };

    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}
