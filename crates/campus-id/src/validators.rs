//! Student number validation against the admission-year window

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::YearWindow;
use crate::error::{IdentifierError, Result};
use crate::student_number::admission_year;

lazy_static! {
    static ref STUDENT_NUMBER_REGEX: Regex = Regex::new(r"^[0-9]{8,10}$").unwrap();
}

/// Check the digit format only (`^[0-9]{8,10}$`)
pub fn is_well_formed(student_number: &str) -> bool {
    STUDENT_NUMBER_REGEX.is_match(student_number)
}

/// Check format and admission window, returning the admission year.
///
/// Safe on arbitrary strings, not only on extractor output.
pub fn check_student_number(
    student_number: &str,
    current_year: i32,
    window: &YearWindow,
) -> Result<i32> {
    if !is_well_formed(student_number) {
        return Err(IdentifierError::NoMatch {
            digits: student_number.chars().filter(char::is_ascii_digit).count(),
        });
    }

    let year = admission_year(student_number)?;
    let (earliest, latest) = window.bounds(current_year);
    if year < earliest || year > latest {
        return Err(IdentifierError::OutOfWindow {
            year,
            earliest,
            latest,
        });
    }

    Ok(year)
}

/// Validate a student number with the default 10-back / 1-ahead window
///
/// # Examples
/// ```
/// use campus_id::validate_student_number;
/// assert!(validate_student_number("2020123456", 2024));
/// assert!(!validate_student_number("2005123456", 2024));
/// assert!(!validate_student_number("1234", 2024));
/// ```
pub fn validate_student_number(student_number: &str, current_year: i32) -> bool {
    check_student_number(student_number, current_year, &YearWindow::default()).is_ok()
}
