//! RFC 1321 message padding over bounded-memory byte sources.
//!
//! The padded stream is the message, one `0x80` byte, zero bytes until the
//! length is 56 mod 64, then the message bit length as a 64-bit little-endian
//! integer. [`Padder`] produces exactly the blocks that padding the whole
//! message in memory would, while holding at most one read chunk and one
//! partial block.

use super::block::{BLOCK_LEN, Block};
use crate::source::ByteSource;
use crate::{MAX_CHUNK_SIZE, Md5Error};

/// Offset within the final block at which the length field starts.
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// First padding byte: a single `1` bit followed by zeros.
const PAD_MARKER: u8 = 0x80;

/// Number of blocks the padded form of a `len`-byte message occupies.
///
/// Equal to `ceil((len + 9) / 64)` but cannot overflow.
///
/// ```
/// use checksums::md5::padded_block_count;
///
/// assert_eq!(padded_block_count(0), 1);
/// assert_eq!(padded_block_count(55), 1);
/// assert_eq!(padded_block_count(56), 2);
/// assert_eq!(padded_block_count(64), 2);
/// ```
#[must_use]
pub const fn padded_block_count(len: u64) -> u64 {
    let full = len / BLOCK_LEN as u64;
    let remainder = (len % BLOCK_LEN as u64) as usize;
    full + tail_block_count(remainder) as u64
}

const fn tail_block_count(remainder: usize) -> usize {
    if remainder < LENGTH_OFFSET { 1 } else { 2 }
}

/// The one or two final blocks: trailing message bytes, padding, and length.
#[derive(Clone, Debug)]
pub struct PaddingTail {
    buf: [u8; 2 * BLOCK_LEN],
    blocks: usize,
    next: usize,
}

impl PaddingTail {
    /// Builds the tail for a message of `total_len` bytes whose last partial
    /// group is `remainder`.
    ///
    /// Fails with [`Md5Error::InvalidArgument`] if `remainder` is a full
    /// block or longer.
    ///
    /// ```
    /// use checksums::md5::PaddingTail;
    ///
    /// assert_eq!(PaddingTail::new(b"abc", 3).unwrap().block_count(), 1);
    /// assert!(PaddingTail::new(&[0u8; 64], 64).is_err());
    /// ```
    pub fn new(remainder: &[u8], total_len: u64) -> Result<Self, Md5Error> {
        if remainder.len() >= BLOCK_LEN {
            return Err(Md5Error::invalid_argument(
                "padding remainder",
                remainder.len() as u64,
            ));
        }
        Ok(Self::from_partial(remainder, total_len))
    }

    /// Builds the tail from a remainder already known to be shorter than a
    /// block.
    pub(crate) fn from_partial(remainder: &[u8], total_len: u64) -> Self {
        debug_assert!(remainder.len() < BLOCK_LEN);

        let mut buf = [0u8; 2 * BLOCK_LEN];
        buf[..remainder.len()].copy_from_slice(remainder);
        buf[remainder.len()] = PAD_MARKER;

        let blocks = tail_block_count(remainder.len());
        let end = blocks * BLOCK_LEN;
        let bit_len = total_len.wrapping_mul(8);
        buf[end - 8..end].copy_from_slice(&bit_len.to_le_bytes());

        tracing::trace!(
            target: "md5::pad",
            remainder = remainder.len(),
            blocks,
            bit_len,
            "built padding tail"
        );

        Self {
            buf,
            blocks,
            next: 0,
        }
    }

    /// Number of blocks in the tail (1 or 2).
    #[must_use]
    pub const fn block_count(&self) -> usize {
        self.blocks
    }
}

impl Iterator for PaddingTail {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if self.next >= self.blocks {
            return None;
        }
        let start = self.next * BLOCK_LEN;
        let mut bytes = [0u8; BLOCK_LEN];
        bytes.copy_from_slice(&self.buf[start..start + BLOCK_LEN]);
        self.next += 1;
        Some(Block::new(bytes))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.blocks - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for PaddingTail {}

enum Phase {
    Message,
    Tail(PaddingTail),
    Done,
}

/// Lazily pads a [`ByteSource`] into 64-byte blocks.
///
/// The source is read in chunks of the buffer size given at construction.
/// After the source reports end of input the padding tail is emitted. A read
/// error is yielded once and the iterator is then fused.
pub struct Padder<S> {
    source: S,
    chunk: Vec<u8>,
    filled: usize,
    cursor: usize,
    pending: [u8; BLOCK_LEN],
    pending_len: usize,
    total: u64,
    phase: Phase,
}

impl<S: ByteSource> Padder<S> {
    /// Creates a padder that reads `chunk_size` bytes at a time.
    ///
    /// The chunk size is clamped to `[BLOCK_LEN, MAX_CHUNK_SIZE]`.
    pub fn new(source: S, chunk_size: usize) -> Self {
        Self {
            source,
            chunk: vec![0u8; chunk_size.clamp(BLOCK_LEN, MAX_CHUNK_SIZE)],
            filled: 0,
            cursor: 0,
            pending: [0u8; BLOCK_LEN],
            pending_len: 0,
            total: 0,
            phase: Phase::Message,
        }
    }

    /// Message bytes consumed from the source so far.
    #[must_use]
    pub const fn bytes_read(&self) -> u64 {
        self.total
    }

    /// Borrow the underlying source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    fn next_message_block(&mut self) -> Option<Result<Block, Md5Error>> {
        loop {
            if self.cursor < self.filled {
                // Fast path: a whole block is available in the chunk buffer.
                if self.pending_len == 0 && self.filled - self.cursor >= BLOCK_LEN {
                    let start = self.cursor;
                    self.cursor += BLOCK_LEN;
                    let mut bytes = [0u8; BLOCK_LEN];
                    bytes.copy_from_slice(&self.chunk[start..start + BLOCK_LEN]);
                    return Some(Ok(Block::new(bytes)));
                }

                let take = (BLOCK_LEN - self.pending_len).min(self.filled - self.cursor);
                self.pending[self.pending_len..self.pending_len + take]
                    .copy_from_slice(&self.chunk[self.cursor..self.cursor + take]);
                self.pending_len += take;
                self.cursor += take;

                if self.pending_len == BLOCK_LEN {
                    self.pending_len = 0;
                    return Some(Ok(Block::new(self.pending)));
                }
                continue;
            }

            match self.source.read_chunk(&mut self.chunk) {
                Ok(0) => {
                    let tail =
                        PaddingTail::from_partial(&self.pending[..self.pending_len], self.total);
                    self.phase = Phase::Tail(tail);
                    return None;
                }
                Ok(read) => {
                    self.total = self.total.wrapping_add(read as u64);
                    self.filled = read;
                    self.cursor = 0;
                }
                Err(error) => {
                    self.phase = Phase::Done;
                    return Some(Err(error));
                }
            }
        }
    }
}

impl<S: ByteSource> Iterator for Padder<S> {
    type Item = Result<Block, Md5Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.phase {
                Phase::Message => {
                    if let Some(item) = self.next_message_block() {
                        return Some(item);
                    }
                }
                Phase::Tail(tail) => {
                    if let Some(block) = tail.next() {
                        return Some(Ok(block));
                    }
                    self.phase = Phase::Done;
                }
                Phase::Done => return None,
            }
        }
    }
}

impl<S> std::fmt::Debug for Padder<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Padder")
            .field("chunk_size", &self.chunk.len())
            .field("bytes_read", &self.total)
            .field("pending_len", &self.pending_len)
            .finish_non_exhaustive()
    }
}
