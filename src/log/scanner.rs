//! Log Scanner
//!
//! Lazy iterator over every line of the log, paired with its start offset.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};

use crate::error::{LogKvError, Result};

use super::LINE_TERMINATOR;

/// Iterator over `(offset, line)` pairs, from offset 0 to end-of-file
///
/// Stops after the first error; a broken line is never skipped.
pub struct LogScanner<'a> {
    /// Buffered reader over the shared log handle
    reader: BufReader<&'a File>,
    /// Offset where the next line starts
    offset: u64,
    /// Set once end-of-file or an error has been reached
    done: bool,
}

impl<'a> LogScanner<'a> {
    pub(super) fn new(mut file: &'a File) -> Result<Self> {
        file.seek(SeekFrom::Start(0))?;

        Ok(Self {
            reader: BufReader::new(file),
            offset: 0,
            done: false,
        })
    }

    fn read_next(&mut self) -> Result<Option<(u64, String)>> {
        let start = self.offset;
        let mut bytes = Vec::new();
        let read = self.reader.read_until(LINE_TERMINATOR, &mut bytes)?;

        if read == 0 {
            return Ok(None);
        }
        self.offset += read as u64;

        if bytes.last() == Some(&LINE_TERMINATOR) {
            bytes.pop();
        }

        let line = String::from_utf8(bytes).map_err(|e| {
            LogKvError::MalformedRecord(format!("Non UTF-8 line at offset {}: {}", start, e))
        })?;

        Ok(Some((start, line)))
    }
}

impl Iterator for LogScanner<'_> {
    type Item = Result<(u64, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_next() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
