//! Append Log file handle
//!
//! Handles appending lines to the log and reading them back by offset.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::config::SyncStrategy;
use crate::error::{LogKvError, Result};

use super::{LogScanner, LINE_TERMINATOR};

/// Exclusive read/write handle on one log file
///
/// The caller must guarantee that no other handle (in this or another
/// process) appends to the same file while this one is alive.
pub struct AppendLog {
    /// Location of the log file
    path: PathBuf,
    /// Read/write handle, writes always land at end-of-file
    file: File,
    /// Flush only, or fsync on every append
    sync_strategy: SyncStrategy,
}

impl AppendLog {
    /// Open or create a log file
    pub fn open(path: &Path, sync_strategy: SyncStrategy) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
            sync_strategy,
        })
    }

    /// Append one encoded record, returning the offset where it starts
    pub fn append(&mut self, line: &str) -> Result<u64> {
        if line.as_bytes().contains(&LINE_TERMINATOR) {
            return Err(LogKvError::MalformedRecord(
                "Record line contains a raw line terminator".to_string(),
            ));
        }

        let offset = self.file.seek(SeekFrom::End(0))?;

        // Single write so a record and its terminator land together
        let mut buf = Vec::with_capacity(line.len() + 1);
        buf.extend_from_slice(line.as_bytes());
        buf.push(LINE_TERMINATOR);

        self.file.write_all(&buf)?;
        self.file.flush()?;

        if self.sync_strategy == SyncStrategy::EveryWrite {
            self.file.sync_data()?;
        }

        tracing::trace!(offset, bytes = buf.len(), "appended record");
        Ok(offset)
    }

    /// Cut the log back to `offset`, discarding a record whose put failed
    ///
    /// Only ever called with the offset returned by the latest `append`;
    /// completed records are never removed.
    pub fn truncate_to(&mut self, offset: u64) -> Result<()> {
        self.file.set_len(offset)?;

        if self.sync_strategy == SyncStrategy::EveryWrite {
            self.file.sync_data()?;
        }

        tracing::trace!(offset, "truncated uncommitted tail");
        Ok(())
    }

    /// Read the single line that starts at `offset`, without its terminator
    pub fn read_record_at(&mut self, offset: u64) -> Result<String> {
        self.file.seek(SeekFrom::Start(offset))?;

        let mut reader = BufReader::new(&mut self.file);
        let mut bytes = Vec::new();
        let read = reader.read_until(LINE_TERMINATOR, &mut bytes)?;

        if read == 0 {
            return Err(LogKvError::MalformedRecord(format!(
                "No record at offset {} in {}",
                offset,
                self.path.display()
            )));
        }

        if bytes.last() == Some(&LINE_TERMINATOR) {
            bytes.pop();
        }

        String::from_utf8(bytes).map_err(|e| {
            LogKvError::MalformedRecord(format!("Non UTF-8 line at offset {}: {}", offset, e))
        })
    }

    /// Lazily scan every line from offset 0
    ///
    /// Each call starts a fresh scan from the beginning of the file.
    pub fn scan_all(&self) -> Result<LogScanner<'_>> {
        LogScanner::new(&self.file)
    }

    /// Force file contents and metadata to disk
    pub fn sync(&mut self) -> Result<()> {
        self.file.flush()?;
        self.file.sync_all()?;
        Ok(())
    }

    /// Current size of the log in bytes
    pub fn len(&self) -> Result<u64> {
        Ok(self.file.metadata()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
