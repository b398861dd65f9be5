//! Student number extraction from raw scan text

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anything that is not an ASCII digit: separators, letters, CR/LF from
    // keyboard-wedge scanners, BOMs. `\D` would keep non-ASCII digits.
    static ref NON_DIGIT_REGEX: Regex = Regex::new(r"[^0-9]+").unwrap();
}

/// Length of the current numbering scheme (e.g. `2020123456`)
pub const LONG_FORM_LEN: usize = 10;

/// Length of the short numbering scheme (e.g. `20201234`)
pub const SHORT_FORM_LEN: usize = 8;

/// Keep only the ASCII digits of `raw`, in order
pub fn digits_only(raw: &str) -> String {
    NON_DIGIT_REGEX.replace_all(raw, "").into_owned()
}

/// Extract a candidate student number from raw scan text.
///
/// Returns the digits when there are exactly 10 (preferred) or 8 of them,
/// `None` otherwise. No year check happens here.
///
/// # Examples
/// ```
/// use campus_id::extract_student_number;
/// assert_eq!(extract_student_number("ID:2020-123456\r\n").as_deref(), Some("2020123456"));
/// assert_eq!(extract_student_number("12345"), None);
/// ```
pub fn extract_student_number(raw: &str) -> Option<String> {
    let digits = digits_only(raw);
    match digits.len() {
        LONG_FORM_LEN | SHORT_FORM_LEN => Some(digits),
        _ => None,
    }
}
