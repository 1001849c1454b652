//! Indexed file strategy
//!
//! Append log + in-memory key → offset index + on-disk index snapshot.
//!
//! ## Lifecycle
//! ```text
//! open() ──┬── snapshot present ──► load snapshot ──┐
//!          │                                        ├──► Ready
//!          └── no snapshot ───────► rebuild + persist ┘
//! ```
//! Only a `Ready` store is ever handed to the caller. A present snapshot is
//! trusted as-is: the log is not rescanned and offsets are not re-validated.

use std::path::Path;

use crate::config::SyncStrategy;
use crate::error::{LogKvError, Result};
use crate::index::{Index, Snapshot};
use crate::log::AppendLog;
use crate::record;

use super::Store;

/// How an [`IndexedFileStore`] got its index at open time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Loaded verbatim from an existing snapshot, log not scanned
    Snapshot,

    /// Built from a full log scan, then persisted as a new snapshot
    Rebuilt,
}

/// Log-structured store with O(1) lookups through an offset index
///
/// ## Ownership
/// Owns the log handle, the index and the snapshot file for its whole
/// lifetime. Callers must not open a second store, of any strategy, on the
/// same log or snapshot while this one is alive.
pub struct IndexedFileStore {
    /// Source of truth
    log: AppendLog,

    /// Key → offset of latest record
    index: Index,

    /// Durable copy of `index`, rewritten after every put
    snapshot: Snapshot,

    /// Which open path produced `index`
    load_source: LoadSource,
}

impl IndexedFileStore {
    /// Open or create an indexed store
    ///
    /// On open:
    /// 1. Open/create the log
    /// 2. Load the snapshot if one exists (no log scan)
    /// 3. Otherwise rebuild the index from the log and persist a snapshot
    pub fn open(
        log_path: &Path,
        snapshot_path: &Path,
        sync_strategy: SyncStrategy,
    ) -> Result<Self> {
        let log = AppendLog::open(log_path, sync_strategy)?;
        let snapshot = Snapshot::new(snapshot_path);

        let (index, load_source) = match snapshot.load()? {
            Some(index) => (index, LoadSource::Snapshot),
            None => {
                let index = Index::build(&log)?;
                snapshot.persist(&index)?;
                (index, LoadSource::Rebuilt)
            }
        };

        tracing::info!(
            log = %log_path.display(),
            snapshot = %snapshot_path.display(),
            source = ?load_source,
            keys = index.len(),
            "opened indexed file store"
        );

        Ok(Self {
            log,
            index,
            snapshot,
            load_source,
        })
    }

    pub fn load_source(&self) -> LoadSource {
        self.load_source
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn log(&self) -> &AppendLog {
        &self.log
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Sync the log to disk and drop all handles
    ///
    /// The snapshot is already current after every put.
    pub fn close(mut self) -> Result<()> {
        self.log.sync()
    }

    /// Undo a put whose snapshot write failed
    ///
    /// Normally the log is cut back to `offset`, leaving log, index and
    /// snapshot exactly as before the put. If the cut fails the record stays
    /// in the log, so the index takes it and the snapshot is removed; the
    /// next open then rebuilds from the log.
    fn abort_put(&mut self, offset: u64, candidate: Index) {
        match self.log.truncate_to(offset) {
            Ok(()) => tracing::warn!(offset, "snapshot write failed, put rolled back"),
            Err(e) => {
                tracing::warn!(offset, error = %e, "log rollback failed, dropping snapshot");
                self.index = candidate;

                if let Err(e) = self.snapshot.remove() {
                    tracing::warn!(
                        path = %self.snapshot.path().display(),
                        error = %e,
                        "failed to remove snapshot"
                    );
                }
            }
        }
    }
}

impl Store for IndexedFileStore {
    fn get(&mut self, key: &str) -> Result<String> {
        let offset = self.index.lookup(key).ok_or(LogKvError::KeyNotFound)?;

        let line = self.log.read_record_at(offset)?;
        let record = record::decode(&line)?;

        // Only possible when the snapshot no longer matches the log
        if record.key != key {
            return Err(LogKvError::MalformedRecord(format!(
                "Index points '{}' at offset {}, which holds key '{}'",
                key, offset, record.key
            )));
        }

        Ok(record.into_value())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        record::validate_key(key)?;
        let offset = self.log.append(&record::encode(key, value))?;

        // The live index only changes once the snapshot holds the new offset
        let mut candidate = self.index.clone();
        candidate.record(key, offset);

        if let Err(e) = self.snapshot.persist(&candidate) {
            self.abort_put(offset, candidate);
            return Err(e);
        }
        self.index = candidate;

        tracing::debug!(key, offset, keys = self.index.len(), "indexed put");
        Ok(())
    }
}
