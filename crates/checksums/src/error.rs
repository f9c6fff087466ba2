use std::io;
use std::path::PathBuf;

/// Errors raised while computing an MD5 digest.
///
/// The compression function and the padder are total over well-formed input,
/// so every variant originates at a boundary: an argument check, the byte
/// source, or the text encoder. Any error aborts the computation; no partial
/// digest state is handed back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Md5Error {
    /// An argument fell outside the range the operation accepts.
    #[error("invalid argument: {what} = {value}")]
    InvalidArgument {
        /// Name of the offending argument.
        what: &'static str,
        /// Value supplied by the caller.
        value: u64,
    },

    /// Reading the byte source failed. The error is surfaced unmodified.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The requested path exists but is not a regular file, or does not exist.
    #[error("File not found: {}", path.display())]
    NotAFile {
        /// Path that was requested.
        path: PathBuf,
    },

    /// Text input could not be represented in the configured encoding.
    #[error("cannot encode input as {encoding}: {reason}")]
    Encoding {
        /// Canonical name of the target encoding.
        encoding: &'static str,
        /// Why the conversion failed.
        reason: String,
    },

    /// The encoding label is not recognised.
    #[error("unsupported encoding: {label}")]
    UnsupportedEncoding {
        /// Label supplied by the caller.
        label: String,
    },
}

impl Md5Error {
    pub(crate) const fn invalid_argument(what: &'static str, value: u64) -> Self {
        Self::InvalidArgument { what, value }
    }

    /// Reports whether the error came from the I/O boundary.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::NotAFile { .. })
    }
}
