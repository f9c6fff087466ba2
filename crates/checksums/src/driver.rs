//! Digest computation over whole inputs.
//!
//! Every entry point folds the blocks of a [`Padder`] into the state with
//! [`compress`] and serialises the result. [`digest_source`] does this for
//! any [`ByteSource`] and surfaces read errors; [`digest_bytes`] does it over
//! a [`SliceSource`], which cannot fail. Reader and file inputs are streamed
//! in [`HashConfig::chunk_size`] pieces, so memory use does not grow with
//! input length.

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use crate::encoding::TextEncoding;
use crate::md5::{Digest, Padder, State, compress};
use crate::source::{ByteSource, ReaderSource, SliceSource};
use crate::{DEFAULT_CHUNK_SIZE, HashConfig, Md5Error};

/// Digest of an in-memory byte sequence.
#[must_use]
pub fn digest_bytes(data: &[u8]) -> Digest {
    let padder = Padder::new(SliceSource::new(data), data.len().min(DEFAULT_CHUNK_SIZE));
    // Slice reads never fail, so `flatten` drops nothing.
    let state = padder
        .flatten()
        .fold(State::INITIAL, |state, block| compress(state, &block));
    Digest::from_state(state)
}

/// Digest of a string's UTF-8 bytes.
///
/// ```
/// assert_eq!(
///     checksums::digest_str("message digest").to_hex(),
///     "f96b697d7cb7938d525a2f31aaf161d0"
/// );
/// ```
#[must_use]
pub fn digest_str(text: &str) -> Digest {
    digest_bytes(text.as_bytes())
}

/// Digest of text after conversion to `encoding`.
pub fn digest_text(text: &OsStr, encoding: TextEncoding) -> Result<Digest, Md5Error> {
    let bytes = encoding.encode_os(text)?;
    Ok(digest_bytes(&bytes))
}

/// Digest of every byte a source produces.
pub fn digest_source<S: ByteSource>(source: S, config: &HashConfig) -> Result<Digest, Md5Error> {
    let expected = source.len_hint();
    let mut padder = Padder::new(source, config.chunk_size());
    let mut state = State::INITIAL;
    let mut blocks = 0u64;

    for block in padder.by_ref() {
        state = compress(state, &block?);
        blocks += 1;
    }

    let read = padder.bytes_read();
    if let Some(expected) = expected {
        if expected != read {
            tracing::warn!(
                target: "md5::io",
                expected,
                read,
                "source length changed while hashing; digest covers bytes read"
            );
        }
    }

    tracing::debug!(target: "md5::digest", bytes = read, blocks, "digest complete");
    Ok(Digest::from_state(state))
}

/// Digest of everything `reader` yields until end of file.
pub fn digest_reader<R: Read>(reader: R, config: &HashConfig) -> Result<Digest, Md5Error> {
    digest_source(ReaderSource::new(reader), config)
}

/// Digest of a regular file, streamed in bounded chunks.
///
/// Missing paths and non-regular files are rejected with
/// [`Md5Error::NotAFile`] before any bytes are read.
pub fn digest_file(path: impl AsRef<Path>, config: &HashConfig) -> Result<Digest, Md5Error> {
    let path = path.as_ref();
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Err(Md5Error::NotAFile {
                path: path.to_path_buf(),
            });
        }
        Err(error) => return Err(Md5Error::Io(error)),
    };

    if !metadata.is_file() {
        return Err(Md5Error::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    tracing::debug!(
        target: "md5::io",
        path = %path.display(),
        len = metadata.len(),
        chunk_size = config.chunk_size(),
        "hashing file"
    );
    digest_source(ReaderSource::with_len_hint(file, metadata.len()), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::md5::Md5;
    use logging::{DiagnosticEvent, EventCollector, Md5Layer, VerbosityConfig};
    use std::io::Cursor;
    use test_support::{ChunkedReader, FailingReader, write_temp_file};
    use tracing_subscriber::layer::SubscriberExt;

    fn capture_events<T>(hash: impl FnOnce() -> T) -> (T, Vec<DiagnosticEvent>) {
        let collector = EventCollector::new();
        let subscriber = tracing_subscriber::registry().with(Md5Layer::new(
            VerbosityConfig::from_verbose_level(0),
            collector.clone(),
        ));
        let result = tracing::subscriber::with_default(subscriber, hash);
        (result, collector.drain())
    }

    #[test]
    fn empty_input_has_rfc_digest() {
        let config = HashConfig::default();
        let expected = "d41d8cd98f00b204e9800998ecf8427e";
        assert_eq!(digest_bytes(b"").to_hex(), expected);
        assert_eq!(digest_str("").to_hex(), expected);
        assert_eq!(
            digest_source(SliceSource::new(b""), &config).unwrap().to_hex(),
            expected
        );
        assert_eq!(
            digest_reader(io::empty(), &config).unwrap().to_hex(),
            expected
        );
    }

    #[test]
    fn source_path_matches_in_memory_path() {
        let data: Vec<u8> = (0u32..10_000).map(|n| (n * 31 % 251) as u8).collect();
        let config = HashConfig::builder().chunk_size(128).build();
        let streamed = digest_reader(ChunkedReader::new(data.clone(), 13), &config).unwrap();
        assert_eq!(streamed, digest_bytes(&data));
    }

    #[test]
    fn entry_points_agree_at_block_boundaries() {
        let config = HashConfig::builder().chunk_size(64).build();
        for len in [0usize, 1, 55, 56, 57, 63, 64, 65, 119, 120, 127, 128, 129, 1000] {
            let data: Vec<u8> = (0..len).map(|n| (n * 7 + 3) as u8).collect();
            let expected = digest_bytes(&data);
            let from_slice = digest_source(SliceSource::new(&data), &config).unwrap();
            let from_reader = digest_reader(ChunkedReader::new(data.clone(), 5), &config).unwrap();
            assert_eq!(from_slice, expected, "slice source, length {len}");
            assert_eq!(from_reader, expected, "reader source, length {len}");
            assert_eq!(Md5::digest(&data), expected, "incremental hasher, length {len}");
        }
    }

    #[test]
    fn text_uses_configured_encoding() {
        let latin1 = TextEncoding::for_label("latin1").unwrap();
        let digest = digest_text(OsStr::new("café"), latin1).unwrap();
        assert_eq!(digest, digest_bytes(b"caf\xe9"));
        assert_ne!(digest, digest_str("café"));
        assert_eq!(
            digest_text(OsStr::new("café"), TextEncoding::UTF_8).unwrap(),
            digest_str("café")
        );
    }

    #[test]
    fn file_digest_matches_contents() {
        let file = write_temp_file(b"message digest");
        let digest = digest_file(file.path(), &HashConfig::default()).unwrap();
        assert_eq!(digest.to_hex(), "f96b697d7cb7938d525a2f31aaf161d0");
    }

    #[test]
    fn missing_file_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.bin");
        match digest_file(&missing, &HashConfig::default()) {
            Err(Md5Error::NotAFile { path }) => assert_eq!(path, missing),
            other => panic!("expected NotAFile, got {other:?}"),
        }
    }

    #[test]
    fn directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            digest_file(dir.path(), &HashConfig::default()),
            Err(Md5Error::NotAFile { .. })
        ));
    }

    #[test]
    fn stale_length_hint_does_not_change_digest() {
        let data = b"abc".to_vec();
        let source = ReaderSource::with_len_hint(Cursor::new(data), 1_000);
        let digest = digest_source(source, &HashConfig::default()).unwrap();
        assert_eq!(digest.to_hex(), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn read_failure_surfaces_as_io_error() {
        let reader = FailingReader::new(vec![1u8; 500], 200);
        match digest_reader(reader, &HashConfig::default()) {
            Err(Md5Error::Io(error)) => {
                assert_eq!(error.to_string(), FailingReader::MESSAGE);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn read_failure_after_several_chunks_surfaces_as_io_error() {
        let config = HashConfig::builder().chunk_size(64).build();
        let reader = FailingReader::new(vec![9u8; 4096], 1000);
        let error = digest_reader(reader, &config).unwrap_err();
        assert!(error.is_io());
        assert!(matches!(error, Md5Error::Io(_)));
    }

    #[test]
    fn stale_length_hint_emits_one_warning() {
        let (digest, events) = capture_events(|| {
            let source = ReaderSource::with_len_hint(Cursor::new(b"abc".to_vec()), 1_000);
            digest_source(source, &HashConfig::default())
        });

        assert_eq!(digest.unwrap().to_hex(), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(events.len(), 1);
        match &events[0] {
            DiagnosticEvent::Warning { message } => {
                assert!(message.starts_with("source length changed while hashing"));
                assert!(message.contains("expected=1000"));
                assert!(message.contains("read=3"));
            }
            other => panic!("expected warning, got {other:?}"),
        }
    }

    #[test]
    fn accurate_length_hint_emits_no_warning() {
        let (digest, events) = capture_events(|| {
            let source = ReaderSource::with_len_hint(Cursor::new(b"abc".to_vec()), 3);
            digest_source(source, &HashConfig::default())
        });

        assert_eq!(digest.unwrap().to_hex(), "900150983cd24fb0d6963f7d28e17f72");
        assert!(events.is_empty());
    }
}
