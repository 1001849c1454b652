//! Index Module
//!
//! In-memory map from key to the offset of that key's latest record.
//!
//! ## Responsibilities
//! - Rebuild from a full log scan (last write wins)
//! - O(log n) key → offset lookups
//! - Round-trip through the on-disk [`Snapshot`]
//!
//! ## Data Structure Choice
//! BTreeMap so the snapshot serializes with keys in a stable order.

mod snapshot;

pub use snapshot::Snapshot;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::log::AppendLog;
use crate::record;

/// Key → offset of the latest record for that key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Index {
    offsets: BTreeMap<String, u64>,
}

impl Index {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from a full scan of the log
    ///
    /// Any line that fails to decode aborts the build.
    pub fn build(log: &AppendLog) -> Result<Self> {
        let mut index = Self::new();

        for entry in log.scan_all()? {
            let (offset, line) = entry?;
            let record = record::decode(&line)?;
            index.record(record.key, offset);
        }

        Ok(index)
    }

    /// Offset of the latest record for `key`
    pub fn lookup(&self, key: &str) -> Option<u64> {
        self.offsets.get(key).copied()
    }

    /// Point `key` at a newer record
    pub fn record(&mut self, key: impl Into<String>, offset: u64) {
        self.offsets.insert(key.into(), offset);
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Indexed keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.offsets.keys().map(String::as_str)
    }
}
