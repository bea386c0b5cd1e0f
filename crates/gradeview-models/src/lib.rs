//! # Gradeview Models
//!
//! Domain models for the student portal.
//!
//! The portal's JSON has no published schema: leaves may be strings or
//! numbers, optional, or `null`, and names are bilingual. The types here absorb
//! that looseness at deserialization time so the rest of the engine works with
//! a stable model.
//!
//! # Modules
//!
//! - [`auth`]: Login credentials and the login form body
//! - [`bilingual`]: [`BilingualText`], a possibly-absent bilingual field
//! - [`ids`]: String-backed identifier newtypes
//! - [`results`]: Academic results (year results, summaries, courses, parts)
//! - [`rpc`]: Parameter objects for the portal's RPC methods
//! - [`students`]: The student profile
//!
//! # Example
//!
//! ```
//! use gradeview_models::AcademicYearResult;
//!
//! let json = r#"[{"ScopeName":"Science|علوم","Year":"2023","ds":[]}]"#;
//! let results: Vec<AcademicYearResult> = serde_json::from_str(json).unwrap();
//! assert!(results[0].summary().is_none());
//! ```

pub mod auth;
pub mod bilingual;
pub mod ids;
pub mod results;
pub mod rpc;
pub mod students;

// Re-export commonly used types at crate root for convenience
pub use auth::{Credentials, LoginForm};
pub use bilingual::BilingualText;
pub use gradeview_auth::SessionToken;
pub use ids::{CollegeId, ScopeUuid, StudentUuid};
pub use results::{AcademicYearResult, CoursePart, CourseResult, OverallGrade, YearSummary};
pub use rpc::{AllResultsParams, StudentPortalDataParams};
pub use students::StudentProfile;
