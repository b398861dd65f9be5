//! Domain types for campus-match
//!
//! This crate provides the models that sit around student number validation:
//! - StudentProfile: the structured record built from the profile form
//! - ProfileDraft: the form as typed, with field validation
//! - VerificationStatus: progress through student verification
//! - OnboardingFlow: the Welcome → Authenticating → SettingUpProfile → Main
//!   state machine

pub mod error;
pub mod flow;
pub mod profile;
pub mod validation;
pub mod verification;

pub use error::*;
pub use flow::*;
pub use profile::*;
pub use validation::*;
pub use verification::*;
