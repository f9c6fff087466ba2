use super::tables::INITIAL_STATE;

/// The 128-bit chaining value threaded through every block.
///
/// `State` is a plain `Copy` value: each computation owns its own and passes
/// it by value through [`compress`](super::compress), so nothing is shared
/// between concurrent digests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct State {
    /// Word A.
    pub a: u32,
    /// Word B.
    pub b: u32,
    /// Word C.
    pub c: u32,
    /// Word D.
    pub d: u32,
}

impl State {
    /// The RFC 1321 initial chaining value.
    pub const INITIAL: Self = Self::from_words(INITIAL_STATE);

    /// Builds a state from `[A, B, C, D]`.
    #[must_use]
    pub const fn from_words(words: [u32; 4]) -> Self {
        Self {
            a: words[0],
            b: words[1],
            c: words[2],
            d: words[3],
        }
    }

    /// Returns `[A, B, C, D]`.
    #[must_use]
    pub const fn words(self) -> [u32; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Serialises A, B, C, D in little-endian byte order.
    #[must_use]
    pub fn to_le_bytes(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.words()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }
}

impl Default for State {
    fn default() -> Self {
        Self::INITIAL
    }
}
