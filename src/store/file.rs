//! Naive file strategy
//!
//! Appends to the log without an index, so every get rescans the file.

use std::path::Path;

use crate::config::SyncStrategy;
use crate::error::{LogKvError, Result};
use crate::log::AppendLog;
use crate::record;

use super::Store;

/// Append log searched by full scan
pub struct FileStore {
    log: AppendLog,
}

impl FileStore {
    /// Open or create the log; nothing is read until the first get
    pub fn open(log_path: &Path, sync_strategy: SyncStrategy) -> Result<Self> {
        let log = AppendLog::open(log_path, sync_strategy)?;
        tracing::info!(path = %log_path.display(), "opened naive file store");
        Ok(Self { log })
    }

    pub fn log(&self) -> &AppendLog {
        &self.log
    }

    /// Sync the log to disk and drop the handle
    pub fn close(mut self) -> Result<()> {
        self.log.sync()
    }
}

impl Store for FileStore {
    /// O(file size): decodes every line, keeps the last match
    fn get(&mut self, key: &str) -> Result<String> {
        let mut latest = None;

        for entry in self.log.scan_all()? {
            let (_, line) = entry?;
            let record = record::decode(&line)?;
            if record.key == key {
                latest = Some(record.into_value());
            }
        }

        latest.ok_or(LogKvError::KeyNotFound)
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        record::validate_key(key)?;
        let offset = self.log.append(&record::encode(key, value))?;
        tracing::debug!(key, offset, "naive put");
        Ok(())
    }
}
