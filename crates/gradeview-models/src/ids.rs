//! Strongly-typed identifier newtypes.
//!
//! Portal identifiers are opaque strings. They are echoed back to the portal
//! verbatim (casing and formatting included), so they are kept as text rather
//! than parsed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines a string-backed identifier newtype.
///
/// `null` and missing values deserialize to the empty identifier.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(
            #[serde(deserialize_with = "gradeview_core::serde::deserialize_lenient_string")]
            String,
        );

        impl $name {
            #[inline]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Unique identifier of a student; required by the results call.
    StudentUuid
);

define_id!(
    /// Identifier of the student's current enrollment scope.
    ScopeUuid
);

define_id!(
    /// Identifier of the student's college.
    CollegeId
);
