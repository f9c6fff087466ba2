//! RFC 1321 MD5.
//!
//! Data flows through the submodules in order: bytes are cut into
//! [`Block`]s by the [`Padder`], each block is folded into the [`State`] by
//! [`compress`], and the final state becomes a [`Digest`].
//!
//! MD5 is cryptographically broken. Use it for checksums and interoperability
//! with systems that mandate it, never for security.

mod block;
mod compress;
mod digest;
mod hasher;
mod padding;
mod state;
pub mod tables;

pub use block::{BLOCK_LEN, BLOCK_WORDS, Block};
pub use compress::compress;
pub use digest::{DIGEST_LEN, Digest, HEX_LEN, ParseDigestError};
pub use hasher::Md5;
pub use padding::{Padder, PaddingTail, padded_block_count};
pub use state::State;
