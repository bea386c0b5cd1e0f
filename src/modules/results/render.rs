//! Report rendering.
//!
//! Turns fetched results into the text sent to the student. Rendering is pure
//! and deterministic, and it is all-or-nothing: if any name cannot be
//! extracted the whole call fails and no partial report is produced.
//!
//! Layout of one year block (every line ends with `\n`):
//!
//! ```text
//! ⬅ {scope} ({year}) - (التقدير العام: {grade}) - (المجموع الكلي: {total}) - (النسبة المئوية الكلية: {percent}%)
//! 1) {course} - {grade} - {achieved}/{max} ({label} = {value}, ...)
//! ```
//!
//! The overall standing is appended to the header only when it is complete.
//! Year blocks are separated by [`BLOCK_SEPARATOR`].

use gradeview_core::{PortalError, first_bilingual_segment};
use gradeview_models::{AcademicYearResult, BilingualText, CoursePart, CourseResult, YearSummary};

/// Sent instead of a report when the student has no results at all.
pub const NO_RESULTS_MESSAGE: &str = "مفيش درجات ولا حاجة لسة يا صديقي!";

/// Placed between consecutive rendered year blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n\n";

/// Renders the report for a student's results.
///
/// Years without a summary are skipped entirely, separator included. An empty
/// input renders [`NO_RESULTS_MESSAGE`]; a non-empty input in which every year
/// is skipped renders the empty string.
///
/// # Errors
///
/// Returns [`PortalError::MalformedResults`] when a scope, grade, course or
/// degree label is absent or cannot be split.
pub fn render_results(results: &[AcademicYearResult]) -> Result<String, PortalError> {
    if results.is_empty() {
        return Ok(NO_RESULTS_MESSAGE.to_string());
    }

    let blocks = results
        .iter()
        .filter_map(|result| result.summary().map(|summary| (result, summary)))
        .map(|(result, summary)| render_year(result, summary))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(blocks.join(BLOCK_SEPARATOR))
}

fn render_year(result: &AcademicYearResult, summary: &YearSummary) -> Result<String, PortalError> {
    let scope = primary(&result.scope_name, || format!("scope name of year {}", result.year))?;

    let mut header = format!("⬅ {} ({})", scope, result.year);
    if let Some(overall) = summary.overall() {
        let grade = overall
            .grade()
            .map_err(|e| with_context(e, format!("overall grade of {scope}")))?;
        header.push_str(&format!(
            " - (التقدير العام: {}) - (المجموع الكلي: {}) - (النسبة المئوية الكلية: {}%)",
            grade, overall.total, overall.percent
        ));
    }

    let mut lines = Vec::with_capacity(summary.courses.len() + 1);
    lines.push(header);

    for (index, course) in summary.courses.iter().enumerate() {
        lines.push(render_course(index + 1, course, scope)?);
    }

    let mut block = lines.join("\n");
    block.push('\n');
    Ok(block)
}

fn render_course(position: usize, course: &CourseResult, scope: &str) -> Result<String, PortalError> {
    let context = || format!("course {position} of {scope}");

    let name = primary(&course.course_name, context)?;
    let grade = primary(&course.grade_name, context)?;
    let line = format!("{position}) {name} - {grade} - {}/{}", course.total, course.max);

    let degrees = render_degrees(&course.parts).map_err(|e| with_context(e, context()))?;
    if degrees.is_empty() {
        Ok(line)
    } else {
        Ok(format!("{line} ({degrees})"))
    }
}

/// `label = value` pairs across all aligned parts, comma-joined.
fn render_degrees(parts: &[CoursePart]) -> Result<String, PortalError> {
    let mut pairs = Vec::new();
    for labelled in parts.iter().filter_map(|part| part.labelled_degrees()) {
        for (label, value) in labelled {
            pairs.push(format!("{} = {}", first_bilingual_segment(label)?, value));
        }
    }
    Ok(pairs.join(", "))
}

fn primary<'a, F>(text: &'a BilingualText, context: F) -> Result<&'a str, PortalError>
where
    F: FnOnce() -> String,
{
    text.primary().map_err(|e| with_context(e, context()))
}

fn with_context(err: PortalError, context: String) -> PortalError {
    match err {
        PortalError::MalformedText(reason) => {
            PortalError::malformed_results(format!("{context}: {reason}"))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str, grade: &str, total: &str, max: &str, parts: Vec<CoursePart>) -> CourseResult {
        CourseResult {
            course_name: name.into(),
            grade_name: grade.into(),
            max: max.into(),
            total: total.into(),
            success_flag: String::new(),
            parts,
        }
    }

    fn part(types: &[&str], degrees: &[&str]) -> CoursePart {
        CoursePart {
            degree_types: types.iter().map(|s| s.to_string()).collect(),
            degrees: degrees.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn year(scope: &str, year: &str, summaries: Vec<YearSummary>) -> AcademicYearResult {
        AcademicYearResult {
            scope_name: scope.into(),
            year: year.into(),
            summaries,
        }
    }

    fn summary(overall: Option<(&str, &str, &str)>, courses: Vec<CourseResult>) -> YearSummary {
        match overall {
            Some((grade, total, percent)) => YearSummary {
                grade_name: grade.into(),
                total: Some(total.into()),
                percent: Some(percent.into()),
                courses,
            },
            None => YearSummary {
                courses,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_empty_input_renders_sentinel() {
        assert_eq!(render_results(&[]).unwrap(), NO_RESULTS_MESSAGE);
    }

    #[test]
    fn test_single_year_with_summary() {
        let results = vec![year(
            "Science|علوم",
            "2023",
            vec![summary(
                Some(("A|أ", "900", "90")),
                vec![course("Math|رياضيات", "A|أ", "95", "100", vec![])],
            )],
        )];

        let text = render_results(&results).unwrap();
        assert_eq!(
            text,
            "⬅ Science (2023) - (التقدير العام: A) - (المجموع الكلي: 900) - (النسبة المئوية الكلية: 90%)\n\
             1) Math - A - 95/100\n"
        );
    }

    #[test]
    fn test_summary_is_appended_to_header() {
        let results = vec![year(
            "Science|علوم",
            "2023",
            vec![summary(
                Some(("A|أ", "900", "90")),
                vec![course("Math", "A", "95", "100", vec![])],
            )],
        )];

        let text = render_results(&results).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("⬅ Science (2023) - (التقدير العام: A) - (المجموع الكلي: 900) - (النسبة المئوية الكلية: 90%)")
        );
        assert_eq!(lines.next(), Some("1) Math - A - 95/100"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_year_without_summary_entries_is_skipped() {
        let results = vec![year("X", "2022", vec![])];
        assert_eq!(render_results(&results).unwrap(), "");
    }

    #[test]
    fn test_skipped_years_add_no_separator() {
        let first = year("One", "2021", vec![summary(None, vec![])]);
        let skipped = year("Skipped", "2022", vec![]);
        let last = year("Two", "2023", vec![summary(None, vec![])]);

        let text = render_results(&[skipped.clone(), first, skipped.clone(), last, skipped]).unwrap();
        assert_eq!(text, "⬅ One (2021)\n\n\n\n⬅ Two (2023)\n");
    }

    #[test]
    fn test_partial_summary_is_suppressed() {
        let mut partial = summary(Some(("B|ب", "700", "70")), vec![]);
        partial.total = None;
        let text = render_results(&[year("Arts", "2020", vec![partial])]).unwrap();
        assert_eq!(text, "⬅ Arts (2020)\n");
    }

    #[test]
    fn test_only_first_summary_is_used() {
        let results = vec![year(
            "Science",
            "2023",
            vec![
                summary(None, vec![course("First", "A", "1", "2", vec![])]),
                summary(None, vec![course("Second", "B", "3", "4", vec![])]),
            ],
        )];
        let text = render_results(&results).unwrap();
        assert!(text.contains("1) First - A - 1/2"));
        assert!(!text.contains("Second"));
    }

    #[test]
    fn test_parts_render_across_all_parts() {
        let parts = vec![
            part(&["Written|تحريري", "Oral|شفوي"], &["60", "15"]),
            part(&["Practical|عملي"], &["20"]),
        ];
        let results = vec![year(
            "Science",
            "2023",
            vec![summary(None, vec![course("Physics|فيزياء", "A|أ", "95", "100", parts)])],
        )];
        let text = render_results(&results).unwrap();
        assert!(text.contains("1) Physics - A - 95/100 (Written = 60, Oral = 15, Practical = 20)\n"));
    }

    #[test]
    fn test_misaligned_part_is_skipped() {
        let parts = vec![
            part(&["Written", "Oral"], &["60"]),
            part(&["Practical"], &["20"]),
        ];
        let courses = vec![
            course("Physics", "A", "95", "100", parts),
            course("Chemistry", "B", "80", "100", vec![part(&["Written"], &[])]),
        ];
        let results = vec![year("Science", "2023", vec![summary(None, courses)])];
        let text = render_results(&results).unwrap();

        assert!(text.contains("1) Physics - A - 95/100 (Practical = 20)\n"));
        assert!(text.contains("2) Chemistry - B - 80/100\n"));
        assert!(!text.contains("Chemistry - B - 80/100 ("));
    }

    #[test]
    fn test_absent_course_name_fails_whole_render() {
        let mut broken = course("Math", "A", "95", "100", vec![]);
        broken.course_name = BilingualText::absent();
        let results = vec![
            year("Fine", "2022", vec![summary(None, vec![])]),
            year("Science", "2023", vec![summary(None, vec![broken])]),
        ];

        let err = render_results(&results).unwrap_err();
        assert!(matches!(err, PortalError::MalformedResults(_)));
        assert!(err.to_string().contains("course 1 of Science"));
    }

    #[test]
    fn test_absent_scope_name_fails() {
        let mut result = year("ignored", "2023", vec![summary(None, vec![])]);
        result.scope_name = BilingualText::absent();
        assert!(matches!(
            render_results(&[result]),
            Err(PortalError::MalformedResults(_))
        ));
    }

    #[test]
    fn test_render_is_deterministic() {
        let results = vec![
            year(
                "Science|علوم",
                "2023",
                vec![summary(
                    Some(("A|أ", "900", "90")),
                    vec![course("Math", "A", "95", "100", vec![part(&["W"], &["50"])])],
                )],
            ),
            year("Arts", "2024", vec![summary(None, vec![])]),
        ];
        let first = render_results(&results).unwrap();
        let second = render_results(&results.clone()).unwrap();
        assert_eq!(first, second);
    }
}
