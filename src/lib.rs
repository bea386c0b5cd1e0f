//! # Gradeview
//!
//! A client for a university student portal that logs in, fetches a student's
//! profile and academic results, and renders the results as a plain-text
//! report.
//!
//! ## Overview
//!
//! One report is produced by four strictly sequential steps, each needing the
//! output of the previous one:
//!
//! 1. **Login** ([`AuthService::login`]): exchange credentials for a
//!    [`SessionToken`] carried by the portal's session cookie
//! 2. **Profile** ([`StudentService::fetch_profile`]): one RPC call returning
//!    the student's identity, including the UUID needed next
//! 3. **Results** ([`ResultsService::fetch_results`]): one RPC call returning
//!    every enrollment scope with its courses and grades
//! 4. **Render** ([`render_results`]): a pure transformation of the results
//!    into report text
//!
//! [`ReportService::generate_report`] runs all four.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── client.rs         # PortalClient: shared HTTP transport + configuration
//! ├── rpc.rs            # RPC envelope (param0/param1/param2) and invocation
//! └── modules/
//!     ├── auth/         # Login
//!     ├── students/     # Profile fetch
//!     ├── results/      # Results fetch and report rendering
//!     └── report/       # The end-to-end pipeline
//! ```
//!
//! Shared pieces live in workspace crates: errors and bilingual text handling
//! in `gradeview-core`, endpoints in `gradeview-config`, session cookies in
//! `gradeview-auth`, and the domain model in `gradeview-models`.
//!
//! ## Statelessness
//!
//! Nothing is cached or persisted. [`PortalClient`] holds no cookie jar: the
//! session token is passed explicitly to every authenticated call, so one
//! client can serve many independent students from concurrent tasks.
//!
//! ## Errors
//!
//! Every operation returns [`PortalError`]. Callers branch on
//! [`PortalError::kind`]: transient transport trouble, rejected credentials,
//! or upstream data the engine cannot use.
//!
//! ## Example
//!
//! ```no_run
//! use gradeview::{Credentials, PortalClient, ReportService};
//!
//! # async fn run() -> Result<(), gradeview::PortalError> {
//! let client = PortalClient::from_env()?;
//! let credentials = Credentials::new("29801011234567", "password");
//! let report = ReportService::generate_report(&client, &credentials).await?;
//! println!("{}", report.text);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod modules;
pub mod rpc;

pub use client::PortalClient;
pub use modules::auth::service::AuthService;
pub use modules::report::service::{ReportService, StudentReport};
pub use modules::results::render::{NO_RESULTS_MESSAGE, render_results};
pub use modules::results::service::ResultsService;
pub use modules::students::service::StudentService;
pub use rpc::RpcEnvelope;

// Re-export workspace crates and their most used types for convenience
pub use gradeview_auth;
pub use gradeview_config;
pub use gradeview_core;
pub use gradeview_models;

pub use gradeview_config::PortalConfig;
pub use gradeview_core::{ErrorKind, PortalError, first_bilingual_segment};
pub use gradeview_models::{AcademicYearResult, Credentials, SessionToken, StudentProfile};
