//! Configuration for logkv
//!
//! Centralized configuration with sensible defaults. The library never reads
//! the environment; everything arrives through this struct.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{LogKvError, Result};

/// Suffix appended to the log path when no snapshot path is configured
pub const SNAPSHOT_SUFFIX: &str = ".index.json";

/// Main configuration for a logkv store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Append-only log file (ignored by the in-memory strategy)
    pub log_path: PathBuf,

    /// Index snapshot file for the indexed strategy.
    /// `None` means `{log_path}.index.json`.
    pub snapshot_path: Option<PathBuf>,

    /// Which storage strategy backs the store
    pub strategy: StrategyKind,

    // -------------------------------------------------------------------------
    // Durability Configuration
    // -------------------------------------------------------------------------
    /// How hard each append is pushed to disk
    pub sync_strategy: SyncStrategy,
}

/// Storage strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyKind {
    /// Ordered list in process memory, lost on exit
    #[value(name = "memory")]
    InMemory,

    /// Append log, every get scans the whole file
    #[value(name = "naive")]
    NaiveFile,

    /// Append log + key → offset index + snapshot
    #[value(name = "indexed")]
    IndexedFile,
}

/// Log sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// Flush userspace buffers after every append
    Flush,

    /// fsync after every append (safest, slowest)
    EveryWrite,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("simple.db"),
            snapshot_path: None,
            strategy: StrategyKind::IndexedFile,
            sync_strategy: SyncStrategy::Flush,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Resolved snapshot path: the explicit one, or the derived default
    pub fn snapshot_path(&self) -> PathBuf {
        match &self.snapshot_path {
            Some(path) => path.clone(),
            None => default_snapshot_path(&self.log_path),
        }
    }
}

/// `{log_path}.index.json`
pub fn default_snapshot_path(log_path: &Path) -> PathBuf {
    let mut name = OsString::from(log_path.as_os_str());
    name.push(SNAPSHOT_SUFFIX);
    PathBuf::from(name)
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::InMemory => "memory",
            StrategyKind::NaiveFile => "naive",
            StrategyKind::IndexedFile => "indexed",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = LogKvError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "memory" => Ok(StrategyKind::InMemory),
            "naive" => Ok(StrategyKind::NaiveFile),
            "indexed" => Ok(StrategyKind::IndexedFile),
            other => Err(LogKvError::Config(format!(
                "Unknown strategy '{}': expected memory, naive or indexed",
                other
            ))),
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the append-only log file
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log_path = path.into();
        self
    }

    /// Set an explicit snapshot file
    pub fn snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.snapshot_path = Some(path.into());
        self
    }

    /// Set the storage strategy
    pub fn strategy(mut self, strategy: StrategyKind) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Set the log sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
