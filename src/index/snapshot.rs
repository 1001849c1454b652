//! Index Snapshot
//!
//! Durable JSON copy of the [`Index`], so a reopen can skip the log scan.
//!
//! ## File Format
//! ```text
//! {"key-a": 0, "key-b": 41, ...}
//! ```
//!
//! The whole file is rewritten on every persist: written to a sibling temp
//! file, then renamed over the snapshot path.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{LogKvError, Result};

use super::Index;

/// Location of one index snapshot
#[derive(Debug, Clone)]
pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the snapshot
    ///
    /// Returns:
    /// - `Ok(Some(index))`: snapshot present and parsed
    /// - `Ok(None)`: no snapshot file
    /// - `Err(InvalidSnapshot)`: file present but not a key → offset map
    pub fn load(&self) -> Result<Option<Index>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let index = serde_json::from_slice::<Index>(&bytes).map_err(|e| {
            LogKvError::InvalidSnapshot(format!("{}: {}", self.path.display(), e))
        })?;

        Ok(Some(index))
    }

    /// Write the full index, replacing any previous snapshot
    pub fn persist(&self, index: &Index) -> Result<()> {
        let bytes = serde_json::to_vec(index).map_err(|e| {
            LogKvError::InvalidSnapshot(format!("Failed to serialize index: {}", e))
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, bytes)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Delete the snapshot so the next open rebuilds from the log
    pub fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `{path}.tmp`, in the same directory so the rename stays atomic
    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}
