use crate::Md5Error;

/// Number of bytes in one block.
pub const BLOCK_LEN: usize = 64;

/// Number of 32-bit words in one block.
pub const BLOCK_WORDS: usize = BLOCK_LEN / 4;

/// An immutable 512-bit chunk of padded message.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Block([u8; BLOCK_LEN]);

impl Block {
    /// Wraps exactly 64 bytes.
    #[must_use]
    pub const fn new(bytes: [u8; BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw block bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; BLOCK_LEN] {
        &self.0
    }

    /// Decodes the block as sixteen little-endian words `M[0..16]`.
    #[inline]
    #[must_use]
    pub fn words(&self) -> [u32; BLOCK_WORDS] {
        let mut words = [0u32; BLOCK_WORDS];
        for (word, bytes) in words.iter_mut().zip(self.0.chunks_exact(4)) {
            *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        words
    }
}

impl TryFrom<&[u8]> for Block {
    type Error = Md5Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; BLOCK_LEN] = bytes
            .try_into()
            .map_err(|_| Md5Error::invalid_argument("block length", bytes.len() as u64))?;
        Ok(Self(array))
    }
}

impl From<[u8; BLOCK_LEN]> for Block {
    fn from(bytes: [u8; BLOCK_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Block {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Block").field(&self.words()).finish()
    }
}
