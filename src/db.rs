//! Db Module
//!
//! The public get/put surface. Callers depend on [`Db`] and never on the
//! storage strategy behind it.

use crate::config::{Config, StrategyKind};
use crate::error::{LogKvError, Result};
use crate::store::{Store, Strategy};

/// Key-value store facade over one [`Strategy`]
///
/// Adds nothing beyond delegation and debug tracing. Defaults to the
/// in-memory list strategy.
#[derive(Default)]
pub struct Db {
    store: Strategy,
}

impl Db {
    /// In-memory store, nothing persisted
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already constructed strategy
    pub fn with_strategy(store: impl Into<Strategy>) -> Self {
        Self {
            store: store.into(),
        }
    }

    /// Open the strategy described by `config`
    pub fn open(config: Config) -> Result<Self> {
        let store = Strategy::open(&config)?;
        tracing::debug!(strategy = %config.strategy, "db opened");
        Ok(Self { store })
    }

    /// Record a new value for `key`
    pub fn put(&mut self, key: &str, value: &str) -> Result<()> {
        tracing::debug!(key, value, "put");
        self.store.put(key, value)
    }

    /// Latest value for `key`, or `KeyNotFound`
    pub fn get(&mut self, key: &str) -> Result<String> {
        tracing::debug!(key, "get");
        self.store.get(key)
    }

    /// Like [`Db::get`], with an absent key as `Ok(None)`
    pub fn get_optional(&mut self, key: &str) -> Result<Option<String>> {
        match self.get(key) {
            Ok(value) => Ok(Some(value)),
            Err(LogKvError::KeyNotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn strategy(&self) -> &Strategy {
        &self.store
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.store.kind()
    }

    /// Close the store gracefully
    ///
    /// Syncs file-backed strategies; dropping the `Db` also releases them.
    pub fn close(self) -> Result<()> {
        self.store.close()
    }
}
