//! Error types for campus-domain

use thiserror::Error;

use crate::validation::ValidationError;

/// A profile draft could not be turned into a profile
#[derive(Error, Debug, Clone)]
pub enum ProfileError {
    /// One or more required fields are missing or invalid
    #[error("Profile is incomplete: {}", summarize(.0))]
    Incomplete(Vec<ValidationError>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Onboarding flow errors
#[derive(Error, Debug, Clone)]
pub enum FlowError {
    /// The action is not allowed from the current screen
    #[error("Cannot {action} from {from}")]
    InvalidTransition { from: String, action: String },

    /// Verification was confirmed before any scan was accepted
    #[error("No verified student number to confirm")]
    NotVerified,

    #[error(transparent)]
    Profile(#[from] ProfileError),
}
