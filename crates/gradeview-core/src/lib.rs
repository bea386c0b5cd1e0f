//! # Gradeview Core
//!
//! Core types, errors, and utilities shared by every Gradeview crate.
//!
//! - [`errors`]: The portal error taxonomy and its caller-facing categories
//! - [`text`]: Extraction of the rendering language from bilingual strings
//! - [`serde`]: Lenient deserializers for the portal's loosely-typed JSON
//!
//! # Example
//!
//! ```
//! use gradeview_core::{PortalError, first_bilingual_segment};
//!
//! let name = first_bilingual_segment("Science|علوم")?;
//! assert_eq!(name, "Science");
//! # Ok::<(), PortalError>(())
//! ```

pub mod errors;
pub mod serde;
pub mod text;

// Re-export commonly used types at crate root
pub use errors::{ErrorKind, PortalError};
pub use text::{BILINGUAL_DELIMITER, first_bilingual_segment};
