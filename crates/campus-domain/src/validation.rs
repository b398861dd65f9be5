//! Validation for profile drafts

use crate::profile::{parse_interests, ProfileDraft, MAX_GRADE, MIN_GRADE};
use serde::{Deserialize, Serialize};

/// Severity of a validation error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

/// A validation error or warning
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

impl ValidationError {
    fn new(field: &str, message: &str, severity: ValidationSeverity) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            severity,
        }
    }
}

/// Validate a profile draft and return errors/warnings
pub fn validate_draft(draft: &ProfileDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Required fields
    if draft.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "name",
            "Name is required",
            ValidationSeverity::Error,
        ));
    }

    if draft.major.trim().is_empty() {
        errors.push(ValidationError::new(
            "major",
            "Major is required",
            ValidationSeverity::Error,
        ));
    }

    let grade = draft.grade.trim();
    if grade.is_empty() {
        errors.push(ValidationError::new(
            "grade",
            "Grade is required",
            ValidationSeverity::Error,
        ));
    } else {
        match grade.parse::<u8>() {
            Ok(g) if (MIN_GRADE..=MAX_GRADE).contains(&g) => {}
            _ => errors.push(ValidationError::new(
                "grade",
                "Grade must be a whole number from 1 to 6",
                ValidationSeverity::Error,
            )),
        }
    }

    // Contact
    if let Some(phone) = draft.phone_number.as_deref() {
        let valid = phone
            .chars()
            .all(|c| c.is_ascii_digit() || c == ' ' || c == '+' || c == '-');
        if !valid || !phone.chars().any(|c| c.is_ascii_digit()) {
            errors.push(ValidationError::new(
                "phone_number",
                "Phone number may only contain digits, spaces, '+' and '-'",
                ValidationSeverity::Warning,
            ));
        }
    }

    // Recommended fields
    if draft.bio.as_deref().map_or(true, |b| b.trim().is_empty()) {
        errors.push(ValidationError::new(
            "bio",
            "A short bio is recommended",
            ValidationSeverity::Info,
        ));
    }

    if parse_interests(&draft.interests).is_empty() {
        errors.push(ValidationError::new(
            "interests",
            "Listing a few interests is recommended",
            ValidationSeverity::Info,
        ));
    }

    errors
}

/// Only the errors that block saving
pub fn blocking_errors(errors: &[ValidationError]) -> Vec<ValidationError> {
    errors
        .iter()
        .filter(|e| e.severity == ValidationSeverity::Error)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ProfileDraft {
        ProfileDraft {
            name: "Kim".to_string(),
            major: "Computer Science".to_string(),
            grade: "3".to_string(),
            bio: Some("Coffee and climbing".to_string()),
            interests: "coffee, climbing".to_string(),
            phone_number: Some("+82 10-1234-5678".to_string()),
        }
    }

    #[test]
    fn test_complete_draft_is_clean() {
        assert!(validate_draft(&complete_draft()).is_empty());
    }

    #[test]
    fn test_missing_required_fields() {
        let draft = ProfileDraft::default();
        let errors = blocking_errors(&validate_draft(&draft));
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "major", "grade"]);
    }

    #[test]
    fn test_grade_out_of_range() {
        for grade in ["0", "7", "two", "-1"] {
            let draft = ProfileDraft {
                grade: grade.to_string(),
                ..complete_draft()
            };
            let errors = validate_draft(&draft);
            assert_eq!(errors.len(), 1, "grade {grade}");
            assert_eq!(errors[0].field, "grade");
        }
    }

    #[test]
    fn test_bad_phone_is_warning_only() {
        let draft = ProfileDraft {
            phone_number: Some("call me".to_string()),
            ..complete_draft()
        };
        let errors = validate_draft(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].severity, ValidationSeverity::Warning);
        assert!(blocking_errors(&errors).is_empty());
    }

    #[test]
    fn test_recommended_fields_are_info() {
        let draft = ProfileDraft {
            bio: None,
            interests: " , ".to_string(),
            ..complete_draft()
        };
        let errors = validate_draft(&draft);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.severity == ValidationSeverity::Info));
    }
}
