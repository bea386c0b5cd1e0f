//! # Gradeview Auth
//!
//! Session handling for the student portal.
//!
//! - [`session`]: The opaque [`SessionToken`] returned by a successful login
//! - [`cookie`]: Locating the session cookie in a login response and rendering
//!   the `Cookie` header for authenticated calls
//!
//! The portal signals a successful login only by setting a session cookie.
//! Nothing here keeps a cookie jar: the token is handed back to the caller and
//! attached explicitly to every later request.
//!
//! # Example
//!
//! ```
//! use gradeview_auth::{cookie_header, session_from_cookies};
//!
//! let cookies = [("ASP.NET_SessionId", "xyz"), ("PortalStudentUserID", "abc123")];
//! let token = session_from_cookies(cookies, "PortalStudentUserID")?;
//! assert_eq!(cookie_header("PortalStudentUserID", &token), "PortalStudentUserID=abc123");
//! # Ok::<(), gradeview_core::PortalError>(())
//! ```

pub mod cookie;
pub mod session;

// Re-export commonly used types at crate root
pub use cookie::{cookie_header, session_from_cookies};
pub use session::SessionToken;
