//! Record Module
//!
//! A record is one (key, value) pair, stored as one line of the log.
//!
//! ## Line Format
//! ```text
//! ┌───────────────────────────────────────────┐
//! │ base64( key │ ',' │ value )          '\n' │
//! └───────────────────────────────────────────┘
//! ```
//!
//! The base64 layer keeps commas, newlines and multi-byte text inside the
//! key or value from colliding with the separator and the line terminator.
//! Decoding splits on the first comma only, so values may contain commas
//! but keys may not ([`validate_key`]).

mod codec;

pub use codec::{decode, encode, validate_key, SEPARATOR};

/// A decoded (key, value) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub value: String,
}

impl Record {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Encode this record as a single newline-free line
    pub fn encode(&self) -> String {
        encode(&self.key, &self.value)
    }

    pub fn into_value(self) -> String {
        self.value
    }
}
