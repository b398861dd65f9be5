//! Student profile domain model

use campus_id::StudentNumber;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::validation::{blocking_errors, validate_draft};

pub const MIN_GRADE: u8 = 1;
pub const MAX_GRADE: u8 = 6;

/// A verified student's profile
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: String,
    pub student_number: StudentNumber,
    pub name: String,
    pub major: String,
    /// Year of study, 1..=6
    pub grade: u8,
    pub bio: Option<String>,
    pub interests: Vec<String>,
    pub phone_number: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StudentProfile {
    /// Student number as shown on screen
    pub fn masked_student_number(&self) -> String {
        self.student_number.masked()
    }

    /// First character of the name, for avatar placeholders
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// The profile form as typed by the user
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    pub major: String,
    /// Raw grade text; parsed on completion
    pub grade: String,
    pub bio: Option<String>,
    /// Comma separated
    pub interests: String,
    pub phone_number: Option<String>,
}

impl ProfileDraft {
    pub fn new(name: impl Into<String>, major: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            major: major.into(),
            ..Self::default()
        }
    }

    /// Pre-fill the grade from the standing derived from the student number.
    /// An already entered grade is kept.
    pub fn with_suggested_grade(mut self, standing: u8) -> Self {
        if self.grade.trim().is_empty() {
            self.grade = standing.to_string();
        }
        self
    }

    /// Validate and build the profile
    pub fn complete(
        self,
        student_number: StudentNumber,
        now: DateTime<Utc>,
    ) -> Result<StudentProfile, ProfileError> {
        let blocking = blocking_errors(&validate_draft(&self));
        if !blocking.is_empty() {
            return Err(ProfileError::Incomplete(blocking));
        }

        let grade = self
            .grade
            .trim()
            .parse::<u8>()
            .map_err(|_| ProfileError::Incomplete(blocking_errors(&validate_draft(&self))))?;

        Ok(StudentProfile {
            id: uuid::Uuid::new_v4().to_string(),
            student_number,
            name: self.name.trim().to_string(),
            major: self.major.trim().to_string(),
            grade,
            bio: non_empty(self.bio),
            interests: parse_interests(&self.interests),
            phone_number: non_empty(self.phone_number),
            is_verified: true,
            created_at: now,
            updated_at: now,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Split a comma separated interest list, trimming and dropping blanks
pub fn parse_interests(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
