//! In-memory list strategy
//!
//! Every put is pushed onto a Vec; nothing survives the process.

use crate::error::{LogKvError, Result};
use crate::record;

use super::Store;

/// Ordered list of (key, value) pairs held in memory
#[derive(Debug, Default)]
pub struct ListStore {
    entries: Vec<(String, String)>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of puts recorded, superseded ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for ListStore {
    fn get(&mut self, key: &str) -> Result<String> {
        // Newest entry wins, so search from the back
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .ok_or(LogKvError::KeyNotFound)
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        // Same key rule as the file strategies, so all three agree
        record::validate_key(key)?;
        self.entries.push((key.to_string(), value.to_string()));
        Ok(())
    }
}
