//! # logkv
//!
//! A minimal single-file key-value store with:
//! - An append-only record log as the source of truth
//! - An in-memory index from key to the offset of its latest record
//! - An index snapshot that lets a reopen skip the log scan
//! - Three interchangeable storage strategies behind one get/put contract
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Db (facade)                          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Strategy (enum)                           │
//! │        InMemory  │  NaiveFile  │  IndexedFile                │
//! └──────────────────┴──────┬──────┴──────┬─────────────────────┘
//!                           │             │
//!                           │      ┌──────┴──────┐
//!                           │      ▼             ▼
//!                           │ ┌──────────┐ ┌──────────┐
//!                           │ │  Index   │─│ Snapshot │
//!                           │ └────┬─────┘ └──────────┘
//!                           ▼      ▼
//!                     ┌─────────────────┐
//!                     │   Append Log    │
//!                     │ (record codec)  │
//!                     └─────────────────┘
//! ```
//!
//! ## Single Writer
//! The engine is synchronous and single-threaded. A log file (and its
//! snapshot) must be owned by exactly one open store at a time; this is not
//! enforced.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod log;
pub mod index;
pub mod store;
pub mod db;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LogKvError, Result};
pub use config::{Config, StrategyKind, SyncStrategy};
pub use db::Db;
pub use store::{Store, Strategy};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of logkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
