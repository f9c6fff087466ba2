//! Shared test utilities for the oc-md5 workspace.
//!
//! The readers here shape how bytes arrive at the digest driver so tests can
//! pin down chunking invariance and error propagation without touching the
//! filesystem.

use std::io::{self, Read, Write};

use tempfile::NamedTempFile;

/// A reader that returns at most `max_read` bytes per call.
///
/// Models pipes and sockets, which routinely return short reads.
#[derive(Debug, Clone)]
pub struct ChunkedReader {
    data: Vec<u8>,
    position: usize,
    max_read: usize,
}

impl ChunkedReader {
    /// Creates a reader over `data` yielding at most `max_read` bytes per call.
    ///
    /// # Panics
    ///
    /// Panics if `max_read` is zero, which would look like end of file.
    pub fn new(data: impl Into<Vec<u8>>, max_read: usize) -> Self {
        assert!(max_read > 0, "max_read must be positive");
        Self {
            data: data.into(),
            position: 0,
            max_read,
        }
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = &self.data[self.position..];
        let count = remaining.len().min(buf.len()).min(self.max_read);
        buf[..count].copy_from_slice(&remaining[..count]);
        self.position += count;
        Ok(count)
    }
}

/// A reader that serves `fail_after` bytes and then fails.
#[derive(Debug, Clone)]
pub struct FailingReader {
    data: Vec<u8>,
    position: usize,
    fail_after: usize,
}

impl FailingReader {
    /// Message carried by the injected error.
    pub const MESSAGE: &'static str = "injected read failure";

    /// Creates a reader that errors once `fail_after` bytes have been read.
    ///
    /// If `data` is shorter than `fail_after`, the reader reaches end of file
    /// normally instead.
    pub fn new(data: impl Into<Vec<u8>>, fail_after: usize) -> Self {
        Self {
            data: data.into(),
            position: 0,
            fail_after,
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.position >= self.fail_after {
            return Err(io::Error::other(Self::MESSAGE));
        }
        let limit = self.fail_after.min(self.data.len());
        let count = (limit - self.position.min(limit)).min(buf.len());
        buf[..count].copy_from_slice(&self.data[self.position..self.position + count]);
        self.position += count;
        Ok(count)
    }
}

/// Writes `contents` to a fresh temporary file that is removed on drop.
///
/// # Panics
///
/// Panics if the temporary file cannot be created or written.
pub fn write_temp_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunked_reader_limits_each_read() {
        let mut reader = ChunkedReader::new(vec![1u8; 10], 3);
        let mut buf = [0u8; 8];
        assert_eq!(reader.read(&mut buf).unwrap(), 3);
        assert_eq!(reader.read(&mut buf).unwrap(), 3);
        assert_eq!(reader.read(&mut buf).unwrap(), 3);
        assert_eq!(reader.read(&mut buf).unwrap(), 1);
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn failing_reader_fails_at_threshold() {
        let mut reader = FailingReader::new(vec![1u8; 10], 4);
        let mut buf = [0u8; 8];
        assert_eq!(reader.read(&mut buf).unwrap(), 4);
        let error = reader.read(&mut buf).unwrap_err();
        assert_eq!(error.to_string(), FailingReader::MESSAGE);
    }

    #[test]
    fn failing_reader_past_data_reaches_eof() {
        let mut reader = FailingReader::new(vec![1u8; 2], 10);
        let mut buf = [0u8; 8];
        assert_eq!(reader.read(&mut buf).unwrap(), 2);
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn temp_file_holds_contents() {
        let file = write_temp_file(b"payload");
        assert_eq!(std::fs::read(file.path()).unwrap(), b"payload");
    }
}
