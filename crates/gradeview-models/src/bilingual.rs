//! Bilingual fields that may be missing on the wire.

use gradeview_core::{PortalError, first_bilingual_segment};
use serde::{Deserialize, Serialize};

/// A `|`-delimited bilingual string that the portal may omit or send as `null`.
///
/// Use with `#[serde(default)]` so a missing key deserializes to the absent
/// value. Absence is not an error until the field is read with
/// [`BilingualText::primary`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BilingualText(Option<String>);

impl BilingualText {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    pub fn absent() -> Self {
        Self(None)
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// The raw, still-delimited value.
    pub fn raw(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// The first language variant.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::MalformedText`] when the field is absent or
    /// cannot be split.
    pub fn primary(&self) -> Result<&str, PortalError> {
        let raw = self
            .raw()
            .ok_or_else(|| PortalError::malformed_text("bilingual field is absent"))?;
        first_bilingual_segment(raw)
    }
}

impl From<&str> for BilingualText {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BilingualText {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
