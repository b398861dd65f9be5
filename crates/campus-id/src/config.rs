//! Validator configuration
//!
//! Loaded from `validator.toml` in the user config directory:
//!
//! ```toml
//! mask_char = "*"
//!
//! [window]
//! years_back = 10
//! years_ahead = 1
//!
//! [standing]
//! min = 1
//! max = 6
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "campus-match";

/// File name of the validator config
pub const CONFIG_FILE_NAME: &str = "validator.toml";

/// Validator-wide configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Character repeated to hide the middle of a student number
    pub mask_char: char,
    /// Admission-year window relative to the current year
    pub window: YearWindow,
    /// Bounds for the derived year of study
    pub standing: StandingBounds,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            mask_char: '*',
            window: YearWindow::default(),
            standing: StandingBounds::default(),
        }
    }
}

/// Rolling window of accepted admission years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YearWindow {
    /// How many years before the current year are still accepted
    pub years_back: u32,
    /// How many years after the current year are accepted (early admission)
    pub years_ahead: u32,
}

impl Default for YearWindow {
    fn default() -> Self {
        Self {
            years_back: 10,
            years_ahead: 1,
        }
    }
}

impl YearWindow {
    /// Inclusive `(earliest, latest)` admission years for `current_year`
    pub fn bounds(&self, current_year: i32) -> (i32, i32) {
        let back = i32::try_from(self.years_back).unwrap_or(i32::MAX);
        let ahead = i32::try_from(self.years_ahead).unwrap_or(i32::MAX);
        (
            current_year.saturating_sub(back),
            current_year.saturating_add(ahead),
        )
    }
}

/// Clamp range for the year of study (a six-year program by default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingBounds {
    pub min: u8,
    pub max: u8,
}

impl Default for StandingBounds {
    fn default() -> Self {
        Self { min: 1, max: 6 }
    }
}

impl ValidatorConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// `<config dir>/campus-match/validator.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from the default path, falling back to defaults when the file is absent
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading validator config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.standing.min == 0 {
            return Err(ConfigError::OutOfRange(
                "standing.min must be at least 1".to_string(),
            ));
        }

        if self.standing.min > self.standing.max {
            return Err(ConfigError::InvalidBounds(
                "standing.min must not exceed standing.max".to_string(),
            ));
        }

        if self.mask_char.is_ascii_digit() {
            return Err(ConfigError::OutOfRange(
                "mask_char must not be a digit".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window.bounds(2024), (2014, 2025));
        assert_eq!(config.standing, StandingBounds { min: 1, max: 6 });
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ValidatorConfig::from_toml("[window]\nyears_back = 4\n").unwrap();
        assert_eq!(config.window.years_back, 4);
        assert_eq!(config.window.years_ahead, 1);
        assert_eq!(config.mask_char, '*');
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ValidatorConfig {
            mask_char: '#',
            ..ValidatorConfig::default()
        };
        let toml = config.to_toml().unwrap();
        assert_eq!(ValidatorConfig::from_toml(&toml).unwrap(), config);
    }

    #[test]
    fn test_json_serialization() {
        let config = ValidatorConfig::default();
        let json = config.to_json().unwrap();
        let parsed = ValidatorConfig::from_json(&json).unwrap();
        assert_eq!(parsed.window, config.window);
    }

    #[test]
    fn test_invalid_standing_bounds() {
        let err = ValidatorConfig::from_toml("[standing]\nmin = 5\nmax = 2\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBounds(_)));
    }

    #[test]
    fn test_json_reversed_standing_bounds_rejected() {
        let err = ValidatorConfig::from_json(r#"{"standing":{"min":5,"max":2}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBounds(_)));
    }

    #[test]
    fn test_json_digit_mask_char_rejected() {
        let err = ValidatorConfig::from_json(r#"{"mask_char":"3"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange(_)));
    }

    #[test]
    fn test_json_malformed_is_parse_error() {
        let err = ValidatorConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_digit_mask_char_rejected() {
        let config = ValidatorConfig {
            mask_char: '7',
            ..ValidatorConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::OutOfRange(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mask_char = \"x\"").unwrap();
        let config = ValidatorConfig::load(file.path()).unwrap();
        assert_eq!(config.mask_char, 'x');
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ValidatorConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
