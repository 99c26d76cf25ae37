//! Incremental readers for growing log files.

mod error;

#[cfg(test)]
mod tests;

pub use error::TailError;

use std::fs::{self, File};
use std::io::{BufRead, BufReader, ErrorKind, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Anything that hands out newly appended log lines, oldest first.
pub trait LineSource {
    /// Returns every complete line that became available since the last call.
    ///
    /// An empty vector means "nothing new yet"; callers are expected to sleep
    /// and ask again.
    fn poll_lines(&mut self) -> Result<Vec<String>, TailError>;
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn poll_lines(&mut self) -> Result<Vec<String>, TailError> {
        (**self).poll_lines()
    }
}

/// Where a freshly opened tail starts reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StartPosition {
    Beginning,
    /// Only lines appended after opening are reported.
    #[default]
    End,
}

/// Follows one log file by polling for appended bytes.
///
/// Only newline-terminated lines are returned; a trailing partial line is
/// kept until its newline arrives. Bytes that are not valid UTF-8 are
/// replaced rather than rejected. When the file becomes shorter than what has
/// already been read (truncation or rotation) it is reopened and read from
/// the start.
#[derive(Debug)]
pub struct LogTail {
    path: PathBuf,
    reader: BufReader<File>,
    offset: u64,
    pending: Vec<u8>,
}

impl LogTail {
    pub fn open(path: impl Into<PathBuf>, start: StartPosition) -> Result<Self, TailError> {
        let path = path.into();
        let file = File::open(&path).map_err(|e| TailError::open(&path, e))?;
        let mut reader = BufReader::new(file);

        let offset = match start {
            StartPosition::Beginning => 0,
            StartPosition::End => reader
                .seek(SeekFrom::End(0))
                .map_err(|e| TailError::open(&path, e))?,
        };

        Ok(Self {
            path,
            reader,
            offset,
            pending: Vec::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bytes consumed so far, partial line included.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    fn reopen_if_shrunk(&mut self) -> Result<(), TailError> {
        let len = match fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            // Mid-rotation the path can be briefly missing; keep the old handle.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(TailError::read(&self.path, e)),
        };

        if len >= self.offset {
            return Ok(());
        }

        tracing::warn!(
            path = %self.path.display(),
            offset = self.offset,
            len,
            "log file shrank, reading it again from the start"
        );

        let file = File::open(&self.path).map_err(|e| TailError::open(&self.path, e))?;
        self.reader = BufReader::new(file);
        self.offset = 0;
        self.pending.clear();

        Ok(())
    }
}

impl LineSource for LogTail {
    fn poll_lines(&mut self) -> Result<Vec<String>, TailError> {
        self.reopen_if_shrunk()?;

        let mut lines = Vec::new();
        loop {
            let n = self
                .reader
                .read_until(b'\n', &mut self.pending)
                .map_err(|e| TailError::read(&self.path, e))?;
            if n == 0 {
                break;
            }
            self.offset += n as u64;

            if self.pending.last() != Some(&b'\n') {
                // Writer is mid-line; the rest arrives on a later poll.
                break;
            }

            self.pending.pop();
            if self.pending.last() == Some(&b'\r') {
                self.pending.pop();
            }

            if !self.pending.iter().all(u8::is_ascii_whitespace) {
                lines.push(String::from_utf8_lossy(&self.pending).into_owned());
            }
            self.pending.clear();
        }

        Ok(lines)
    }
}
