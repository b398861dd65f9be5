//! Onboarding flow state machine
//!
//! Screen transitions:
//! ```text
//! Welcome → Authenticating → SettingUpProfile → Main
//!    ↑            │                  │            │
//!    └──── back ──┴────── back ──────┘── logout ──┘
//! ```
//!
//! Leaving for `Welcome` always discards the scanned number and profile.

use campus_id::{IdentifierValidator, StudentNumber, YearSource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FlowError;
use crate::profile::{ProfileDraft, StudentProfile};
use crate::verification::VerificationStatus;

/// Message shown after a rejected scan
pub const RETRY_MESSAGE: &str = "Student number not recognized. Please scan your card again.";

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    Welcome,
    Authenticating,
    SettingUpProfile,
    Main,
}

impl Screen {
    /// Check if a screen transition is valid
    pub fn can_transition_to(&self, target: &Screen) -> bool {
        matches!(
            (self, target),
            (Screen::Welcome, Screen::Authenticating)
                | (Screen::Authenticating, Screen::Authenticating)
                | (Screen::Authenticating, Screen::SettingUpProfile)
                | (Screen::Authenticating, Screen::Welcome)
                | (Screen::SettingUpProfile, Screen::Main)
                | (Screen::SettingUpProfile, Screen::Welcome)
                | (Screen::Main, Screen::Main)
                | (Screen::Main, Screen::Welcome)
        )
    }

    /// Get valid next screens from the current screen
    pub fn valid_transitions(&self) -> Vec<Screen> {
        match self {
            Screen::Welcome => vec![Screen::Authenticating],
            Screen::Authenticating => vec![
                Screen::Authenticating,
                Screen::SettingUpProfile,
                Screen::Welcome,
            ],
            Screen::SettingUpProfile => vec![Screen::Main, Screen::Welcome],
            Screen::Main => vec![Screen::Main, Screen::Welcome],
        }
    }
}

/// Tabs on the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MainTab {
    #[default]
    Matching,
    Chats,
    Profile,
}

/// Screen plus the data that screen owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FlowState {
    Welcome,
    Authenticating(VerificationStatus),
    SettingUpProfile { student_number: StudentNumber },
    Main { profile: StudentProfile, tab: MainTab },
}

impl FlowState {
    pub fn screen(&self) -> Screen {
        match self {
            FlowState::Welcome => Screen::Welcome,
            FlowState::Authenticating(_) => Screen::Authenticating,
            FlowState::SettingUpProfile { .. } => Screen::SettingUpProfile,
            FlowState::Main { .. } => Screen::Main,
        }
    }
}

/// The onboarding flow of a single app session
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingFlow {
    state: FlowState,
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self {
            state: FlowState::Welcome,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    /// The authenticated student number, once past verification
    pub fn student_number(&self) -> Option<&StudentNumber> {
        match &self.state {
            FlowState::SettingUpProfile { student_number } => Some(student_number),
            FlowState::Main { profile, .. } => Some(&profile.student_number),
            _ => None,
        }
    }

    pub fn profile(&self) -> Option<&StudentProfile> {
        match &self.state {
            FlowState::Main { profile, .. } => Some(profile),
            _ => None,
        }
    }

    fn transition(&mut self, action: &str, next: FlowState) -> Result<(), FlowError> {
        let from = self.screen();
        let to = next.screen();
        if !from.can_transition_to(&to) {
            tracing::debug!(
                ?from,
                ?to,
                allowed = ?from.valid_transitions(),
                action,
                "transition refused"
            );
            return Err(self.invalid(action));
        }
        tracing::info!(?from, ?to, action, "flow transition");
        self.state = next;
        Ok(())
    }

    fn invalid(&self, action: &str) -> FlowError {
        FlowError::InvalidTransition {
            from: format!("{:?}", self.screen()),
            action: action.to_string(),
        }
    }

    /// Welcome → Authenticating
    pub fn start_authentication(&mut self) -> Result<(), FlowError> {
        if self.screen() != Screen::Welcome {
            return Err(self.invalid("start authentication"));
        }
        self.transition(
            "start authentication",
            FlowState::Authenticating(VerificationStatus::default()),
        )
    }

    /// Run a scan through the validator while authenticating.
    ///
    /// Returns whether the scan was accepted. A rejected scan keeps the
    /// flow on the authentication screen with a retry message.
    pub fn submit_scan<C: YearSource>(
        &mut self,
        validator: &IdentifierValidator<C>,
        raw: &str,
    ) -> Result<bool, FlowError> {
        let FlowState::Authenticating(status) = &self.state else {
            return Err(self.invalid("submit scan"));
        };

        let (next, accepted) = match validator.process(raw) {
            Some(number) => (VerificationStatus::scanned(number), true),
            None => (status.clone().rejected(RETRY_MESSAGE), false),
        };
        self.transition("submit scan", FlowState::Authenticating(next))?;
        Ok(accepted)
    }

    /// Authenticating (with an accepted scan) → SettingUpProfile.
    ///
    /// Marks the verification step complete before leaving the screen.
    pub fn confirm_verification(&mut self) -> Result<(), FlowError> {
        if self.screen() != Screen::Authenticating {
            return Err(self.invalid("confirm verification"));
        }
        if let FlowState::Authenticating(status) = &mut self.state {
            if !status.complete() {
                return Err(FlowError::NotVerified);
            }
            tracing::debug!(step = status.step.display_name(), "verification complete");
        }
        let student_number = match &self.state {
            FlowState::Authenticating(status) => status.student_number.clone(),
            _ => None,
        }
        .ok_or(FlowError::NotVerified)?;
        self.transition(
            "confirm verification",
            FlowState::SettingUpProfile { student_number },
        )
    }

    /// SettingUpProfile → Main. On a validation failure the flow stays put.
    pub fn complete_profile(
        &mut self,
        draft: ProfileDraft,
        now: DateTime<Utc>,
    ) -> Result<&StudentProfile, FlowError> {
        let FlowState::SettingUpProfile { student_number } = &self.state else {
            return Err(self.invalid("complete profile"));
        };
        let profile = draft.complete(student_number.clone(), now)?;
        self.transition(
            "complete profile",
            FlowState::Main {
                profile,
                tab: MainTab::default(),
            },
        )?;
        self.profile().ok_or_else(|| self.invalid("complete profile"))
    }

    /// Switch tabs on the main screen
    pub fn select_tab(&mut self, tab: MainTab) -> Result<(), FlowError> {
        if let FlowState::Main { tab: current, .. } = &mut self.state {
            *current = tab;
            return Ok(());
        }
        Err(self.invalid("select tab"))
    }

    /// Authenticating / SettingUpProfile → Welcome, discarding progress
    pub fn back(&mut self) -> Result<(), FlowError> {
        match self.screen() {
            Screen::Authenticating | Screen::SettingUpProfile => {
                self.transition("go back", FlowState::Welcome)
            }
            _ => Err(self.invalid("go back")),
        }
    }

    /// Main → Welcome, discarding the session
    pub fn logout(&mut self) -> Result<(), FlowError> {
        if self.screen() != Screen::Main {
            return Err(self.invalid("log out"));
        }
        self.transition("log out", FlowState::Welcome)
    }
}
