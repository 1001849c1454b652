//! Record codec
//!
//! Encoding and decoding functions for log lines.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{LogKvError, Result};
use super::Record;

/// Separates key from value inside the decoded line
pub const SEPARATOR: char = ',';

/// Reject keys that would not survive a first-separator split
///
/// Every strategy calls this before accepting a put.
pub fn validate_key(key: &str) -> Result<()> {
    if key.contains(SEPARATOR) {
        return Err(LogKvError::InvalidKey(format!(
            "'{}' contains the '{}' separator",
            key, SEPARATOR
        )));
    }
    Ok(())
}

/// Encode a key-value pair to one log line (without terminator)
///
/// `key` must already have passed [`validate_key`].
pub fn encode(key: &str, value: &str) -> String {
    let mut raw = String::with_capacity(key.len() + 1 + value.len());
    raw.push_str(key);
    raw.push(SEPARATOR);
    raw.push_str(value);

    STANDARD.encode(raw.as_bytes())
}

/// Decode one log line back into a record
///
/// Splits on the first separator only; everything after it is the value.
pub fn decode(line: &str) -> Result<Record> {
    let bytes = STANDARD
        .decode(line.trim_end_matches(['\r', '\n']))
        .map_err(|e| LogKvError::MalformedRecord(format!("Invalid base64: {}", e)))?;

    let raw = String::from_utf8(bytes)
        .map_err(|e| LogKvError::MalformedRecord(format!("Invalid UTF-8: {}", e)))?;

    match raw.split_once(SEPARATOR) {
        Some((key, value)) => Ok(Record::new(key, value)),
        None => Err(LogKvError::MalformedRecord(format!(
            "Missing '{}' separator in {} byte record",
            SEPARATOR,
            raw.len()
        ))),
    }
}
