//! Byte sources feeding the padder.
//!
//! Anything that can report an optional total length and hand out its bytes
//! in order, without gaps or duplication, can be hashed. In-memory buffers
//! and readers (files, pipes, sockets) are the two implementations shipped
//! here.

use std::io::{self, Read};

use crate::Md5Error;

/// A sequential producer of message bytes.
pub trait ByteSource {
    /// Total number of bytes the source expects to produce, if known up front.
    ///
    /// The hint is advisory. The digest always covers the bytes actually
    /// returned by [`read_chunk`](Self::read_chunk).
    fn len_hint(&self) -> Option<u64>;

    /// Copies the next bytes into `buf`, returning how many were written.
    ///
    /// `Ok(0)` signals end of input (for a non-empty `buf`).
    fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize, Md5Error>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn len_hint(&self) -> Option<u64> {
        (**self).len_hint()
    }

    fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize, Md5Error> {
        (**self).read_chunk(buf)
    }
}

/// A [`ByteSource`] over a complete in-memory buffer.
#[derive(Clone, Debug)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> SliceSource<'a> {
    /// Creates a source over `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Bytes not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.position..]
    }
}

impl ByteSource for SliceSource<'_> {
    fn len_hint(&self) -> Option<u64> {
        Some(self.data.len() as u64)
    }

    fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize, Md5Error> {
        let remaining = self.remaining();
        let count = remaining.len().min(buf.len());
        buf[..count].copy_from_slice(&remaining[..count]);
        self.position += count;
        Ok(count)
    }
}

/// A [`ByteSource`] backed by any [`Read`] implementation.
///
/// Interrupted reads are retried because they consume no bytes. Any other
/// error is surfaced unchanged; a partial read is never silently repeated.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    len_hint: Option<u64>,
    reads: u64,
}

impl<R: Read> ReaderSource<R> {
    /// Wraps a reader whose length is discovered incrementally.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            len_hint: None,
            reads: 0,
        }
    }

    /// Wraps a reader whose total length is known in advance.
    pub const fn with_len_hint(reader: R, len: u64) -> Self {
        Self {
            reader,
            len_hint: Some(len),
            reads: 0,
        }
    }

    /// Number of successful non-empty reads so far.
    #[must_use]
    pub const fn reads(&self) -> u64 {
        self.reads
    }

    /// Unwraps the inner reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn len_hint(&self) -> Option<u64> {
        self.len_hint
    }

    fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize, Md5Error> {
        // Fill as much of `buf` as the reader will give before returning so
        // that short reads from pipes do not shrink the effective chunk size.
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(read) => filled += read,
                Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
                Err(error) => return Err(Md5Error::Io(error)),
            }
        }

        if filled > 0 {
            self.reads += 1;
            tracing::trace!(target: "md5::io", bytes = filled, read = self.reads, "read chunk");
        }
        Ok(filled)
    }
}
