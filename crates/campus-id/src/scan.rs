//! Scan sources
//!
//! A scan source delivers raw bytes from whatever reads the student card.
//! The stub stands in for the camera while barcode decoding is not wired up;
//! [`LineScanSource`] reads keyboard-wedge or serial scanners that emit one
//! code per line.

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::error::{IdentifierError, ScanError};

/// Placeholder number delivered by the test-mode scanner
pub const STUB_STUDENT_NUMBER: &str = "2020123456";

/// Raw payload of a single scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScan {
    pub bytes: Vec<u8>,
    /// Barcode symbology reported by the reader (e.g. "code128")
    pub symbology: String,
}

impl RawScan {
    pub fn new(bytes: impl Into<Vec<u8>>, symbology: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            symbology: symbology.into(),
        }
    }

    /// Decode the payload as text.
    ///
    /// A payload that is not UTF-8 breaks the caller's contract and is
    /// reported instead of being folded into an ordinary "no match".
    pub fn text(&self) -> Result<&str, IdentifierError> {
        std::str::from_utf8(&self.bytes).map_err(|e| {
            IdentifierError::InputContract(format!(
                "{} payload is not UTF-8: {e}",
                self.symbology
            ))
        })
    }
}

/// Something that can acquire raw scan bytes
pub trait ScanSource {
    /// Block until the next scan is available
    fn acquire(&mut self) -> Result<RawScan, ScanError>;

    /// Short name for logs
    fn name(&self) -> &str;
}

/// Always returns the same payload
#[derive(Debug, Clone)]
pub struct StubScanSource {
    payload: String,
}

impl StubScanSource {
    pub fn new() -> Self {
        Self::with_payload(STUB_STUDENT_NUMBER)
    }

    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl Default for StubScanSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanSource for StubScanSource {
    fn acquire(&mut self) -> Result<RawScan, ScanError> {
        tracing::debug!("stub scanner returning placeholder payload");
        Ok(RawScan::new(self.payload.as_bytes(), "stub"))
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// One scan per line from a buffered reader
pub struct LineScanSource<R> {
    reader: R,
    symbology: String,
}

impl<R: BufRead> LineScanSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            symbology: "code128".to_string(),
        }
    }

    pub fn with_symbology(mut self, symbology: impl Into<String>) -> Self {
        self.symbology = symbology.into();
        self
    }
}

impl<R: BufRead> ScanSource for LineScanSource<R> {
    fn acquire(&mut self) -> Result<RawScan, ScanError> {
        let mut line = Vec::new();
        let read = self.reader.read_until(b'\n', &mut line)?;
        if read == 0 {
            return Err(ScanError::Exhausted(self.name().to_string()));
        }
        // Line terminators stay in the payload; extraction drops them.
        Ok(RawScan::new(line, self.symbology.clone()))
    }

    fn name(&self) -> &str {
        "line"
    }
}
