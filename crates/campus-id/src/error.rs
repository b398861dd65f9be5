//! Error types for campus-id

use thiserror::Error;

/// Result type alias for identifier operations
pub type Result<T> = std::result::Result<T, IdentifierError>;

/// Why a scan did or did not yield a student number
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Scan did not reduce to 8 or 10 digits
    #[error("No student number found in scan ({digits} digits)")]
    NoMatch { digits: usize },

    /// Digits are well formed but the admission year is outside the window
    #[error("Admission year {year} outside accepted window {earliest}..={latest}")]
    OutOfWindow { year: i32, earliest: i32, latest: i32 },

    /// A precondition on an identifier was broken (e.g. non-digit year prefix)
    #[error("Malformed student number: {0}")]
    Malformed(String),

    /// The scan payload is not text at all
    #[error("Scan payload violates input contract: {0}")]
    InputContract(String),
}

impl IdentifierError {
    /// Ordinary rejections the user recovers from by scanning again
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            IdentifierError::NoMatch { .. } | IdentifierError::OutOfWindow { .. }
        )
    }
}

/// Errors raised while acquiring a raw scan
#[derive(Error, Debug)]
pub enum ScanError {
    /// The underlying reader failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source has no more scans to deliver
    #[error("Scan source {0} is exhausted")]
    Exhausted(String),
}

/// Configuration loading or validation error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
