//! Feature modules.
//!
//! Each module exposes a stateless `*Service` whose operations take the shared
//! [`PortalClient`](crate::PortalClient) explicitly.

pub mod auth;
pub mod report;
pub mod results;
pub mod students;
