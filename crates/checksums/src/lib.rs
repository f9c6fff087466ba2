#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bitops;
mod config;
pub mod driver;
pub mod encoding;
mod error;
pub mod md5;
pub mod source;

#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub mod parallel;

pub use config::{
    DEFAULT_CHUNK_SIZE, HashConfig, HashConfigBuilder, MAX_CHUNK_SIZE, MIN_CHUNK_SIZE,
};
pub use driver::{digest_bytes, digest_file, digest_reader, digest_source, digest_str, digest_text};
pub use encoding::TextEncoding;
pub use error::Md5Error;
pub use md5::{Digest, Md5, ParseDigestError};
pub use source::{ByteSource, ReaderSource, SliceSource};
