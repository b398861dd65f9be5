//! Scan-to-student-number pipeline bound to a clock and a config

use crate::clock::{SystemClock, YearSource};
use crate::config::ValidatorConfig;
use crate::error::{ConfigError, IdentifierError, Result};
use crate::extractors::{digits_only, extract_student_number};
use crate::scan::RawScan;
use crate::student_number::{admission_year, mask_with, standing_for, StudentNumber};
use crate::validators::check_student_number;

/// Extracts, validates and derives views of student numbers.
///
/// Stateless apart from its configuration; every method is pure with respect
/// to the year reported by `clock`.
#[derive(Debug, Clone)]
pub struct IdentifierValidator<C = SystemClock> {
    clock: C,
    config: ValidatorConfig,
}

impl IdentifierValidator<SystemClock> {
    /// Wall-clock validator with default configuration
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for IdentifierValidator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: YearSource> IdentifierValidator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            config: ValidatorConfig::default(),
        }
    }

    /// Replace the configuration; rejects values that fail
    /// [`ValidatorConfig::validate`]
    pub fn with_config(
        mut self,
        config: ValidatorConfig,
    ) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn current_year(&self) -> i32 {
        self.clock.current_year()
    }

    /// Digits of `raw` when they form an 8 or 10 digit candidate
    pub fn extract(&self, raw: &str) -> Option<String> {
        extract_student_number(raw)
    }

    /// Format and admission-window check on an arbitrary string
    pub fn validate(&self, student_number: &str) -> bool {
        check_student_number(student_number, self.current_year(), &self.config.window).is_ok()
    }

    /// Extract then validate, keeping the rejection reason
    pub fn evaluate(&self, raw: &str) -> Result<StudentNumber> {
        let candidate = extract_student_number(raw).ok_or_else(|| IdentifierError::NoMatch {
            digits: digits_only(raw).len(),
        })?;
        check_student_number(&candidate, self.current_year(), &self.config.window)?;
        Ok(StudentNumber::from_checked(candidate))
    }

    /// Extract then validate; every rejection becomes `None`.
    ///
    /// Never fails: ordinary rejections are logged at debug level, anything
    /// unexpected at warn, and the caller only ever sees a retry.
    pub fn process(&self, raw: &str) -> Option<StudentNumber> {
        match self.evaluate(raw) {
            Ok(number) => {
                tracing::debug!(student_number = ?number, "scan accepted");
                Some(number)
            }
            Err(err) if err.is_retryable() => {
                tracing::debug!(error = %err, "scan rejected");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "unexpected failure while processing scan");
                None
            }
        }
    }

    /// [`process`](Self::process) for a raw scan; only a payload that is not
    /// text at all is surfaced as an error.
    pub fn process_scan(&self, scan: &RawScan) -> Result<Option<StudentNumber>> {
        let text = scan.text()?;
        Ok(self.process(text))
    }

    /// Mask with the configured mask character
    pub fn mask(&self, student_number: &str) -> String {
        mask_with(student_number, self.config.mask_char)
    }

    /// Four-digit admission year prefix
    pub fn admission_year(&self, student_number: &str) -> Result<i32> {
        admission_year(student_number)
    }

    /// Year of study, clamped to the configured standing bounds
    pub fn derived_standing(&self, student_number: &str) -> Result<u8> {
        let year = admission_year(student_number)?;
        Ok(standing_for(
            year,
            self.current_year(),
            &self.config.standing,
        ))
    }
}
