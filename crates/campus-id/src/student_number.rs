//! The normalized student number and its derived views

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::StandingBounds;
use crate::error::{IdentifierError, Result};
use crate::validators::is_well_formed;

/// Characters kept visible at the front of a masked number
pub const VISIBLE_PREFIX: usize = 4;

/// Width of the mask token
pub const MASK_WIDTH: usize = 4;

/// A digit-only student number (8 or 10 digits after extraction).
///
/// `Debug` prints the masked form so the full number stays out of logs;
/// use [`StudentNumber::as_str`] or `Display` where the real value is needed.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentNumber(String);

impl StudentNumber {
    /// Wrap a string already checked by [`is_well_formed`]
    pub(crate) fn from_checked(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Masked form with the default `*` token
    pub fn masked(&self) -> String {
        mask_student_number(&self.0)
    }

    /// Four-digit admission year prefix
    pub fn admission_year(&self) -> i32 {
        // Well-formedness guarantees four leading ASCII digits
        self.0[..VISIBLE_PREFIX]
            .bytes()
            .fold(0, |acc, b| acc * 10 + i32::from(b - b'0'))
    }

    /// Year of study for `current_year`, clamped to `bounds`
    pub fn standing(&self, current_year: i32, bounds: &StandingBounds) -> u8 {
        standing_for(self.admission_year(), current_year, bounds)
    }
}

impl TryFrom<String> for StudentNumber {
    type Error = IdentifierError;

    /// Format check only; the admission window depends on the clock and is
    /// applied by the validator.
    fn try_from(value: String) -> Result<Self> {
        if is_well_formed(&value) {
            Ok(Self(value))
        } else {
            Err(IdentifierError::Malformed(mask_student_number(&value)))
        }
    }
}

impl From<StudentNumber> for String {
    fn from(value: StudentNumber) -> Self {
        value.0
    }
}

impl AsRef<str> for StudentNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for StudentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StudentNumber").field(&self.masked()).finish()
    }
}

/// Mask a student number for display with `*`.
///
/// - 10 characters: `2020123456` → `2020****56`
/// - 8 characters: `20201234` → `2020****`
/// - anything else is returned unchanged
pub fn mask_student_number(student_number: &str) -> String {
    mask_with(student_number, '*')
}

/// Mask with a custom mask character. Lengths are counted in characters, so
/// arbitrary input never splits a code point.
pub fn mask_with(student_number: &str, mask_char: char) -> String {
    let chars: Vec<char> = student_number.chars().collect();
    let token: String = std::iter::repeat(mask_char).take(MASK_WIDTH).collect();

    match chars.len() {
        10 => {
            let mut masked: String = chars[..VISIBLE_PREFIX].iter().collect();
            masked.push_str(&token);
            masked.extend(&chars[VISIBLE_PREFIX + MASK_WIDTH..]);
            masked
        }
        8 => {
            let mut masked: String = chars[..VISIBLE_PREFIX].iter().collect();
            masked.push_str(&token);
            masked
        }
        _ => student_number.to_string(),
    }
}

/// Parse the four-digit admission year prefix.
///
/// Callers are expected to validate first; a short or non-numeric prefix is
/// reported as [`IdentifierError::Malformed`] rather than panicking.
pub fn admission_year(student_number: &str) -> Result<i32> {
    let prefix = student_number
        .get(..VISIBLE_PREFIX)
        .filter(|p| p.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| IdentifierError::Malformed(mask_student_number(student_number)))?;

    prefix
        .parse::<i32>()
        .map_err(|e| IdentifierError::Malformed(e.to_string()))
}

/// `current_year - admission_year + 1`, clamped to `bounds`.
///
/// Reversed bounds are reordered rather than trusted.
pub fn standing_for(admission_year: i32, current_year: i32, bounds: &StandingBounds) -> u8 {
    let low = bounds.min.min(bounds.max);
    let high = bounds.min.max(bounds.max);
    let raw = i64::from(current_year) - i64::from(admission_year) + 1;
    let clamped = raw.clamp(i64::from(low), i64::from(high));
    u8::try_from(clamped).unwrap_or(high)
}

/// Derived year of study with the default 1..=6 bounds
pub fn derived_standing(student_number: &str, current_year: i32) -> Result<u8> {
    let year = admission_year(student_number)?;
    Ok(standing_for(year, current_year, &StandingBounds::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_long_form() {
        assert_eq!(mask_student_number("2020123456"), "2020****56");
    }

    #[test]
    fn test_mask_short_form() {
        assert_eq!(mask_student_number("20201234"), "2020****");
    }

    #[test]
    fn test_mask_passthrough() {
        assert_eq!(mask_student_number("123"), "123");
        assert_eq!(mask_student_number(""), "");
        assert_eq!(mask_student_number("202012345"), "202012345");
    }

    #[test]
    fn test_mask_multibyte_does_not_panic() {
        assert_eq!(mask_student_number("학번학번학번학번학번"), "학번학번****학번");
    }

    #[test]
    fn test_mask_custom_char() {
        assert_eq!(mask_with("2020123456", '#'), "2020####56");
    }

    #[test]
    fn test_remask_reveals_nothing_new() {
        let once = mask_student_number("2020123456");
        assert_eq!(mask_student_number(&once), once);
    }

    #[test]
    fn test_admission_year() {
        assert_eq!(admission_year("2020123456"), Ok(2020));
        assert_eq!(admission_year("19991234"), Ok(1999));
        assert!(matches!(admission_year("20"), Err(IdentifierError::Malformed(_))));
        assert!(matches!(admission_year("20a0123456"), Err(IdentifierError::Malformed(_))));
    }

    #[test]
    fn test_derived_standing() {
        assert_eq!(derived_standing("2024123456", 2024), Ok(1));
        assert_eq!(derived_standing("2021123456", 2024), Ok(4));
        // Clamped at both ends
        assert_eq!(derived_standing("2027123456", 2024), Ok(1));
        assert_eq!(derived_standing("2010123456", 2024), Ok(6));
    }

    #[test]
    fn test_standing_custom_bounds() {
        let bounds = StandingBounds { min: 1, max: 4 };
        assert_eq!(standing_for(2018, 2024, &bounds), 4);
    }

    #[test]
    fn test_standing_reversed_bounds_does_not_panic() {
        let reversed = StandingBounds { min: 5, max: 2 };
        assert_eq!(standing_for(2020, 2024, &reversed), 5);
        assert_eq!(standing_for(2024, 2024, &reversed), 2);
        assert_eq!(standing_for(2000, 2024, &reversed), 5);
    }

    #[test]
    fn test_student_number_try_from() {
        let number = StudentNumber::try_from("2020123456".to_string()).unwrap();
        assert_eq!(number.admission_year(), 2020);
        assert_eq!(number.masked(), "2020****56");
        assert!(StudentNumber::try_from("2020-1234".to_string()).is_err());
    }

    #[test]
    fn test_debug_is_masked() {
        let number = StudentNumber::try_from("2020123456".to_string()).unwrap();
        let debug = format!("{number:?}");
        assert!(debug.contains("2020****56"));
        assert!(!debug.contains("1234"));
    }

    #[test]
    fn test_serde_transparent() {
        let number = StudentNumber::try_from("20201234".to_string()).unwrap();
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "\"20201234\"");
        let back: StudentNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, number);
        assert!(serde_json::from_str::<StudentNumber>("\"abc\"").is_err());
    }
}
