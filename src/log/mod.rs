//! Append Log Module
//!
//! The on-disk source of truth: an append-only sequence of encoded records.
//!
//! ## Responsibilities
//! - Append encoded records at end-of-file and report their start offset
//! - Read back a single record given its offset
//! - Lazy full scans from offset 0 (naive lookups, index rebuilds)
//!
//! ## File Format
//! ```text
//! offset 0  ┌──────────────────────────────┐
//!           │ record line 1          '\n'  │
//! offset n1 ├──────────────────────────────┤
//!           │ record line 2          '\n'  │
//! offset n2 ├──────────────────────────────┤
//!           │ ...                          │
//!           └──────────────────────────────┘
//! ```
//!
//! No header, no record count, no checksum. Bytes of a completed record are
//! never rewritten; superseded records simply stay in the file.

mod append_log;
mod scanner;

pub use append_log::AppendLog;
pub use scanner::LogScanner;

/// Terminates every record line
pub const LINE_TERMINATOR: u8 = b'\n';
