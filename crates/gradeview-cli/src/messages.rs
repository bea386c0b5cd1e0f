//! User-facing messages.
//!
//! The engine reports failures as [`PortalError`] values; this module owns
//! the wording shown to the student for each of them.

use gradeview::{ErrorKind, PortalError};
use validator::ValidationErrors;

pub const INVALID_NATIONAL_ID: &str = "الرقم القومي مش صح لأنه المفروض يبقى 14 رقم. إتأكد تاني وجرب من جديد.";

pub const EMPTY_PASSWORD: &str = "مفيش باسورد. إتأكد إنك مش حاطط مثلاً مسافات أو حاجة شبه كدا وجرب تاني من جديد.";

pub const LOGGING_IN: &str = "ثواني بنحاول نسجل الدخول...";

pub const WRONG_CREDENTIALS: &str = "راجع بيانات الدخول تاني كدا الموقع مش قابلها.";

pub const UNKNOWN_FAILURE: &str = "معلهش متأسفين. حصل خطأ مش عارفينه إيه هو بالظبط ولكن هنحاول نشوفه إيه هو ولو ينفع يتصلح من عندنا هنصلحه.";

pub const BAD_PORTAL_DATA: &str = "البيانات اللي جات من الموقع مش سليمة ممكن يكون فيه مشكلة دلوقتي أو يكون الموقع حصل فيه تغييرات.";

pub const BAD_RESULTS: &str = "النتيجة اللي جات من الموقع مش سليمة ممكن يكون فيه مشكلة دلوقتي أو يكون الموقع حصل فيه تغييرات.";

/// Greeting shown once the profile has been fetched.
pub fn greeting(student_name: &str) -> String {
    format!("جبنا بياناتك بنجاح يا {student_name}، حد قالك إنك حد جميل وشكلك حلو ❤️ ثواني هنجيب النتيجة بقى.")
}

/// Message for a failed engine call.
pub fn for_error(err: &PortalError) -> &'static str {
    match err.kind() {
        ErrorKind::Credentials => WRONG_CREDENTIALS,
        ErrorKind::UpstreamData => match err {
            PortalError::MalformedResults(_) => BAD_RESULTS,
            _ => BAD_PORTAL_DATA,
        },
        ErrorKind::Transient | ErrorKind::Internal => UNKNOWN_FAILURE,
    }
}

/// Message for credentials rejected before any request is made.
///
/// The national ID is checked first, matching the order the fields are asked
/// for.
pub fn for_validation(errors: &ValidationErrors) -> &'static str {
    let fields = errors.field_errors();
    if fields.contains_key("national_id") {
        INVALID_NATIONAL_ID
    } else {
        EMPTY_PASSWORD
    }
}
