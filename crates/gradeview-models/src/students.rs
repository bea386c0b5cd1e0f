//! Student profile returned by `Portal.General.GetStudentPortalData`.

use gradeview_core::PortalError;
use gradeview_core::serde::{deserialize_lenient_i64, deserialize_lenient_string};
use serde::{Deserialize, Serialize};

use crate::bilingual::BilingualText;
use crate::ids::{CollegeId, ScopeUuid, StudentUuid};

/// Identity and locator fields of the logged-in student.
///
/// Built from exactly one profile call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Bilingual full name.
    #[serde(rename = "StdName", default)]
    pub name: BilingualText,

    /// Portal-relative path of the profile picture.
    #[serde(rename = "ImagePath", default, deserialize_with = "deserialize_lenient_string")]
    pub image_path: String,

    #[serde(rename = "UUID", default)]
    pub uuid: StudentUuid,

    #[serde(rename = "CollageID", default)]
    pub college_id: CollegeId,

    /// Bilingual college name.
    #[serde(rename = "Collage", default)]
    pub college: BilingualText,

    #[serde(rename = "ScopeUUID", default)]
    pub scope_uuid: ScopeUuid,

    #[serde(rename = "Year", default, deserialize_with = "deserialize_lenient_string")]
    pub year: String,

    #[serde(rename = "StudyYear", default, deserialize_with = "deserialize_lenient_string")]
    pub study_year: String,

    #[serde(rename = "ShowMessage", default, deserialize_with = "deserialize_lenient_string")]
    pub show_message: String,

    #[serde(rename = "ID", default, deserialize_with = "deserialize_lenient_i64")]
    pub id: i64,
}

impl StudentProfile {
    /// The student's name in the rendering language.
    pub fn display_name(&self) -> Result<&str, PortalError> {
        self.name.primary()
    }

    pub fn has_image(&self) -> bool {
        !self.image_path.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE_JSON: &str = r#"{
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
    }"#;

    #[test]
    fn test_deserialize_profile() {
        let profile: StudentProfile = serde_json::from_str(PROFILE_JSON).unwrap();
        assert_eq!(profile.display_name().unwrap(), "Mona Ali");
        assert_eq!(profile.uuid.as_str(), "6B1F0C9E-1111-2222-3333-444455556666");
        assert_eq!(profile.college.primary().unwrap(), "Engineering");
        assert_eq!(profile.college_id.as_str(), "5");
        assert_eq!(profile.study_year, "3");
        assert_eq!(profile.id, 987);
        assert!(profile.has_image());
    }

    #[test]
    fn test_deserialize_sparse_profile() {
        let profile: StudentProfile = serde_json::from_str(r#"{"UUID":"u-1","ID":"12"}"#).unwrap();
        assert_eq!(profile.uuid.as_str(), "u-1");
        assert_eq!(profile.id, 12);
        assert!(!profile.has_image());
        assert!(matches!(
            profile.display_name(),
            Err(PortalError::MalformedText(_))
        ));
    }
}
