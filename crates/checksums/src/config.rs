use crate::encoding::TextEncoding;
use crate::md5::BLOCK_LEN;

/// Default number of bytes requested from a source per read.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Smallest accepted chunk size: one block.
pub const MIN_CHUNK_SIZE: usize = BLOCK_LEN;

/// Largest accepted chunk size.
pub const MAX_CHUNK_SIZE: usize = 16 * 1024 * 1024;

/// Settings shared by every digest computation.
///
/// The chunk size bounds the memory used to stream a source: the driver holds
/// one chunk plus one partial block regardless of input length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashConfig {
    chunk_size: usize,
    encoding: TextEncoding,
}

impl HashConfig {
    /// Configuration with default chunk size and UTF-8 text.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            encoding: TextEncoding::UTF_8,
        }
    }

    /// Starts a builder seeded with the defaults.
    #[must_use]
    pub const fn builder() -> HashConfigBuilder {
        HashConfigBuilder {
            config: Self::new(),
        }
    }

    /// Bytes requested from the source per read.
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Encoding applied to text input.
    #[must_use]
    pub const fn encoding(&self) -> TextEncoding {
        self.encoding
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`HashConfig`].
#[derive(Clone, Copy, Debug)]
pub struct HashConfigBuilder {
    config: HashConfig,
}

impl HashConfigBuilder {
    /// Sets the read chunk size.
    ///
    /// The value is clamped to `[MIN_CHUNK_SIZE, MAX_CHUNK_SIZE]` and rounded
    /// up to a whole number of blocks.
    pub const fn chunk_size(mut self, bytes: usize) -> Self {
        self.config.chunk_size = normalize_chunk_size(bytes);
        self
    }

    /// Sets the text encoding.
    pub const fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.config.encoding = encoding;
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub const fn build(self) -> HashConfig {
        self.config
    }
}

const fn normalize_chunk_size(bytes: usize) -> usize {
    let clamped = if bytes < MIN_CHUNK_SIZE {
        MIN_CHUNK_SIZE
    } else if bytes > MAX_CHUNK_SIZE {
        MAX_CHUNK_SIZE
    } else {
        bytes
    };
    clamped.next_multiple_of(BLOCK_LEN)
}
