//! Storage Strategies
//!
//! Three interchangeable implementations of the same get/put contract.
//!
//! | Strategy           | get            | put                  | persistent |
//! |--------------------|----------------|----------------------|------------|
//! | [`ListStore`]      | O(n) in memory | O(1)                 | no         |
//! | [`FileStore`]      | O(file size)   | O(1) append          | yes        |
//! | [`IndexedFileStore`] | O(1) seek    | append + snapshot    | yes        |
//!
//! All of them resolve duplicate keys by last-write-wins.
//!
//! ## Concurrency
//! None. Strategies take `&mut self` and assume they are the only writer of
//! their files; opening two file strategies on the same log is a caller bug.

mod file;
mod indexed;
mod list;

pub use file::FileStore;
pub use indexed::{IndexedFileStore, LoadSource};
pub use list::ListStore;

use crate::config::{Config, StrategyKind};
use crate::error::Result;

/// The get/put capability every strategy provides
pub trait Store {
    /// Latest value for `key`, or `KeyNotFound`
    fn get(&mut self, key: &str) -> Result<String>;

    /// Record a new value for `key`
    fn put(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Closed set of storage strategies, chosen at construction
pub enum Strategy {
    InMemory(ListStore),
    NaiveFile(FileStore),
    IndexedFile(IndexedFileStore),
}

impl Strategy {
    /// Build the strategy selected by `config`
    pub fn open(config: &Config) -> Result<Self> {
        let strategy = match config.strategy {
            StrategyKind::InMemory => Strategy::InMemory(ListStore::new()),
            StrategyKind::NaiveFile => Strategy::NaiveFile(FileStore::open(
                &config.log_path,
                config.sync_strategy,
            )?),
            StrategyKind::IndexedFile => Strategy::IndexedFile(IndexedFileStore::open(
                &config.log_path,
                &config.snapshot_path(),
                config.sync_strategy,
            )?),
        };

        Ok(strategy)
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::InMemory(_) => StrategyKind::InMemory,
            Strategy::NaiveFile(_) => StrategyKind::NaiveFile,
            Strategy::IndexedFile(_) => StrategyKind::IndexedFile,
        }
    }

    /// Sync file-backed strategies and release their handles
    pub fn close(self) -> Result<()> {
        match self {
            Strategy::InMemory(_) => Ok(()),
            Strategy::NaiveFile(store) => store.close(),
            Strategy::IndexedFile(store) => store.close(),
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::InMemory(ListStore::new())
    }
}

impl Store for Strategy {
    fn get(&mut self, key: &str) -> Result<String> {
        match self {
            Strategy::InMemory(store) => store.get(key),
            Strategy::NaiveFile(store) => store.get(key),
            Strategy::IndexedFile(store) => store.get(key),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            Strategy::InMemory(store) => store.put(key, value),
            Strategy::NaiveFile(store) => store.put(key, value),
            Strategy::IndexedFile(store) => store.put(key, value),
        }
    }
}

impl From<ListStore> for Strategy {
    fn from(store: ListStore) -> Self {
        Strategy::InMemory(store)
    }
}

impl From<FileStore> for Strategy {
    fn from(store: FileStore) -> Self {
        Strategy::NaiveFile(store)
    }
}

impl From<IndexedFileStore> for Strategy {
    fn from(store: IndexedFileStore) -> Self {
        Strategy::IndexedFile(store)
    }
}
