//! Academic results returned by `Portal.Results.GetAllResults`.
//!
//! The payload is a JSON array with one [`AcademicYearResult`] per enrollment
//! scope. Each carries zero or more [`YearSummary`] entries (only the first is
//! ever shown), which hold the ordered [`CourseResult`]s and their
//! [`CoursePart`] breakdowns.
//!
//! Ordering is significant everywhere: it is the order the portal sent and the
//! order reports are rendered in.

use gradeview_core::PortalError;
use gradeview_core::serde::{
    deserialize_lenient_string, deserialize_lenient_strings, deserialize_null_as_empty,
    deserialize_optional_lenient_string,
};
use serde::{Deserialize, Serialize};

use crate::bilingual::BilingualText;

/// Results of one enrollment scope / academic year.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AcademicYearResult {
    #[serde(rename = "ScopeName", default)]
    pub scope_name: BilingualText,

    /// Display label of the year, e.g. `2023/2024`.
    #[serde(rename = "Year", default, deserialize_with = "deserialize_lenient_string")]
    pub year: String,

    #[serde(rename = "ds", default, deserialize_with = "deserialize_null_as_empty")]
    pub summaries: Vec<YearSummary>,
}

impl AcademicYearResult {
    /// The summary that reports are built from, if the portal sent any.
    pub fn summary(&self) -> Option<&YearSummary> {
        self.summaries.first()
    }
}

/// Overall standing for a year plus its course results.
///
/// Grade name, total and percentage arrive independently and any of them may be
/// missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct YearSummary {
    #[serde(rename = "GradeName", default)]
    pub grade_name: BilingualText,

    #[serde(rename = "Total", default, deserialize_with = "deserialize_optional_lenient_string")]
    pub total: Option<String>,

    #[serde(rename = "Percent", default, deserialize_with = "deserialize_optional_lenient_string")]
    pub percent: Option<String>,

    #[serde(rename = "StudyYearCourses", default, deserialize_with = "deserialize_null_as_empty")]
    pub courses: Vec<CourseResult>,
}

/// The complete overall standing of a year; see [`YearSummary::overall`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverallGrade<'a> {
    pub grade_name: &'a BilingualText,
    pub total: &'a str,
    pub percent: &'a str,
}

impl OverallGrade<'_> {
    pub fn grade(&self) -> Result<&str, PortalError> {
        self.grade_name.primary()
    }
}

impl YearSummary {
    /// Returns the overall standing only when grade, total and percentage are
    /// all present. A partial standing is never exposed.
    pub fn overall(&self) -> Option<OverallGrade<'_>> {
        if !self.grade_name.is_present() {
            return None;
        }
        Some(OverallGrade {
            grade_name: &self.grade_name,
            total: self.total.as_deref()?,
            percent: self.percent.as_deref()?,
        })
    }
}

/// One course of a year.
///
/// Course and grade names must be present to render. A course the portal sends
/// with a `null` grade (e.g. not yet graded) fails the whole report with
/// `MalformedResults` rather than rendering a blank grade.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CourseResult {
    #[serde(rename = "CourseName", default)]
    pub course_name: BilingualText,

    #[serde(rename = "GradeName", default)]
    pub grade_name: BilingualText,

    /// Maximum attainable score.
    #[serde(rename = "Max", default, deserialize_with = "deserialize_lenient_string")]
    pub max: String,

    /// Achieved score.
    #[serde(rename = "Total", default, deserialize_with = "deserialize_lenient_string")]
    pub total: String,

    #[serde(rename = "SuccessFlag", default, deserialize_with = "deserialize_lenient_string")]
    pub success_flag: String,

    #[serde(rename = "Parts", default, deserialize_with = "deserialize_null_as_empty")]
    pub parts: Vec<CoursePart>,
}

/// Score breakdown of one part of a course (e.g. one semester).
///
/// `degree_types[i]` labels `degrees[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoursePart {
    /// Bilingual labels, e.g. `Written|تحريري`.
    #[serde(rename = "DegreesType", default, deserialize_with = "deserialize_lenient_strings")]
    pub degree_types: Vec<String>,

    #[serde(rename = "Degrees", default, deserialize_with = "deserialize_lenient_strings")]
    pub degrees: Vec<String>,

    #[serde(rename = "DegreesMax", default, deserialize_with = "deserialize_lenient_string")]
    pub degrees_max: String,

    #[serde(rename = "CoursePartName", default, deserialize_with = "deserialize_lenient_string")]
    pub part_name: String,

    #[serde(rename = "SemasterName", default, deserialize_with = "deserialize_lenient_string")]
    pub semester_name: String,
}

impl CoursePart {
    /// Labels and values can only be paired when both lists have the same length.
    pub fn is_aligned(&self) -> bool {
        self.degree_types.len() == self.degrees.len()
    }

    /// `(raw label, value)` pairs in order, or `None` when the lists are misaligned.
    pub fn labelled_degrees(&self) -> Option<impl Iterator<Item = (&str, &str)>> {
        self.is_aligned().then(|| {
            self.degree_types
                .iter()
                .map(String::as_str)
                .zip(self.degrees.iter().map(String::as_str))
        })
    }
}
