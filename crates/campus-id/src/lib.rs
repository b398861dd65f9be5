//! Student number extraction and validation for campus-match
//!
//! This crate turns raw student-card scans into student numbers:
//! - Extraction of the 8 or 10 digit number from scanner output
//! - Validation against a rolling admission-year window
//! - Masking for display
//! - Admission year and year-of-study derivation
//! - Scan sources (test-mode stub, line-oriented readers)

pub mod clock;
pub mod config;
pub mod error;
pub mod extractors;
pub mod scan;
pub mod student_number;
pub mod validator;
pub mod validators;

pub use clock::*;
pub use config::*;
pub use error::*;
pub use extractors::*;
pub use scan::*;
pub use student_number::*;
pub use validator::*;
pub use validators::*;
