use super::block::{BLOCK_LEN, Block};
use super::compress::compress;
use super::digest::Digest;
use super::padding::PaddingTail;
use super::state::State;

/// Streaming MD5 hasher.
///
/// Bytes may be fed in any split; the result depends only on their
/// concatenation. The hasher owns its chaining value outright, so clones are
/// independent and instances can live on separate threads.
#[derive(Clone)]
pub struct Md5 {
    state: State,
    buffer: [u8; BLOCK_LEN],
    buffered: usize,
    total_len: u64,
    blocks: u64,
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5 {
    /// Creates a hasher holding the RFC 1321 initial state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: State::INITIAL,
            buffer: [0u8; BLOCK_LEN],
            buffered: 0,
            total_len: 0,
            blocks: 0,
        }
    }

    /// Feeds additional bytes into the digest state.
    pub fn update(&mut self, mut data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_LEN {
                return;
            }
            let block = Block::new(self.buffer);
            self.absorb(&block);
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for chunk in &mut blocks {
            let mut bytes = [0u8; BLOCK_LEN];
            bytes.copy_from_slice(chunk);
            self.absorb(&Block::new(bytes));
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    fn absorb(&mut self, block: &Block) {
        self.state = compress(self.state, block);
        self.blocks += 1;
    }

    /// Message bytes fed so far.
    #[must_use]
    pub const fn bytes_hashed(&self) -> u64 {
        self.total_len
    }

    /// Blocks folded into the state so far.
    #[must_use]
    pub const fn blocks_compressed(&self) -> u64 {
        self.blocks
    }

    /// Pads the buffered remainder and returns the finished digest.
    #[must_use]
    pub fn finalize(mut self) -> Digest {
        let tail = PaddingTail::from_partial(&self.buffer[..self.buffered], self.total_len);
        for block in tail {
            self.absorb(&block);
        }
        Digest::from_state(self.state)
    }

    /// Convenience helper that computes the MD5 digest for `data` in one shot.
    #[must_use]
    pub fn digest(data: &[u8]) -> Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

impl std::fmt::Debug for Md5 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Md5")
            .field("bytes_hashed", &self.total_len)
            .field("blocks_compressed", &self.blocks)
            .finish_non_exhaustive()
    }
}

impl std::io::Write for Md5 {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
