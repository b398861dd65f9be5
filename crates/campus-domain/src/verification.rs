//! Student verification status

use campus_id::StudentNumber;
use serde::{Deserialize, Serialize};

/// How far identity verification has progressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VerificationStep {
    /// Nothing scanned yet
    #[default]
    None,
    /// Student card barcode accepted
    Barcode,
    /// University email confirmed
    Email,
    /// Phone number confirmed
    Phone,
    /// All required checks passed
    Complete,
}

impl VerificationStep {
    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::None => "Not started",
            Self::Barcode => "Card scanned",
            Self::Email => "Email confirmed",
            Self::Phone => "Phone confirmed",
            Self::Complete => "Verified",
        }
    }
}

/// Verification progress shown on the authentication screen
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerificationStatus {
    pub step: VerificationStep,
    pub student_number: Option<StudentNumber>,
    /// Retry prompt after a rejected scan
    pub error_message: Option<String>,
}

impl VerificationStatus {
    pub fn is_authenticated(&self) -> bool {
        self.step == VerificationStep::Complete && self.student_number.is_some()
    }

    /// Record an accepted scan
    pub fn scanned(student_number: StudentNumber) -> Self {
        Self {
            step: VerificationStep::Barcode,
            student_number: Some(student_number),
            error_message: None,
        }
    }

    /// Mark verification complete once a card has been accepted.
    ///
    /// Returns whether the status is now authenticated; an unscanned status
    /// is left untouched.
    pub fn complete(&mut self) -> bool {
        if self.step == VerificationStep::Barcode && self.student_number.is_some() {
            self.step = VerificationStep::Complete;
            self.error_message = None;
        }
        self.is_authenticated()
    }

    /// Record a rejected scan; any earlier accepted number is kept
    pub fn rejected(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Masked student number for display, if one was scanned
    pub fn masked_student_number(&self) -> Option<String> {
        self.student_number.as_ref().map(StudentNumber::masked)
    }
}
