//! Bilingual text handling.
//!
//! The portal encodes two language variants in one string separated by
//! [`BILINGUAL_DELIMITER`], e.g. `"Science|علوم"`. Reports always use the first
//! variant.

use crate::errors::PortalError;

/// Separator between the language variants of a bilingual field.
pub const BILINGUAL_DELIMITER: char = '|';

/// Returns the first language variant of a bilingual string.
///
/// A string without the delimiter is a single-variant string and is returned
/// whole; the empty string yields an empty segment.
///
/// # Errors
///
/// Returns [`PortalError::MalformedText`] if the split yields no segment.
pub fn first_bilingual_segment(text: &str) -> Result<&str, PortalError> {
    text.split(BILINGUAL_DELIMITER)
        .next()
        .ok_or_else(|| PortalError::malformed_text(format!("cannot split {text:?}")))
}
