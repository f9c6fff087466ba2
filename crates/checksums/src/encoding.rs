//! Conversion of text input to message bytes.
//!
//! Strings are hashed as bytes in an explicitly chosen encoding. UTF-8 is the
//! default. Labels are resolved through `encoding_rs`, so every WHATWG label
//! is accepted (`latin1` therefore resolves to `windows-1252`).

use std::borrow::Cow;
use std::ffi::OsStr;
use std::fmt;
use std::str::FromStr;

use encoding_rs::Encoding;

use crate::Md5Error;

/// The character encoding used to turn text into message bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextEncoding(&'static Encoding);

impl TextEncoding {
    /// UTF-8, the default.
    pub const UTF_8: Self = Self(encoding_rs::UTF_8);

    /// Resolves an encoding label such as `utf-8`, `latin1` or `shift_jis`.
    ///
    /// Encodings that cannot be produced as output (UTF-16 variants and the
    /// `replacement` encoding) are rejected because `encoding_rs` would
    /// silently substitute UTF-8 for them.
    pub fn for_label(label: &str) -> Result<Self, Md5Error> {
        let encoding = Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
            Md5Error::UnsupportedEncoding {
                label: label.to_owned(),
            }
        })?;

        if encoding.output_encoding() != encoding {
            return Err(Md5Error::Encoding {
                encoding: encoding.name(),
                reason: "encoding cannot be used for output".to_owned(),
            });
        }

        Ok(Self(encoding))
    }

    /// Canonical WHATWG name of the encoding.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.0.name()
    }

    /// Encodes `text`, failing if any character is unmappable.
    ///
    /// ```
    /// use checksums::TextEncoding;
    ///
    /// let latin1 = TextEncoding::for_label("latin1").unwrap();
    /// assert_eq!(&*latin1.encode("café").unwrap(), b"caf\xe9");
    /// assert!(latin1.encode("日本").is_err());
    /// ```
    pub fn encode(self, text: &str) -> Result<Cow<'_, [u8]>, Md5Error> {
        let (bytes, _, had_errors) = self.0.encode(text);
        if had_errors {
            return Err(self.unmappable(text));
        }
        Ok(bytes)
    }

    /// Encodes an OS string, which must first be valid Unicode.
    pub fn encode_os(self, text: &OsStr) -> Result<Cow<'_, [u8]>, Md5Error> {
        let text = text.to_str().ok_or_else(|| Md5Error::Encoding {
            encoding: self.name(),
            reason: "input is not valid Unicode".to_owned(),
        })?;
        self.encode(text)
    }

    fn unmappable(self, text: &str) -> Md5Error {
        let mut scratch = [0u8; 4];
        let offending = text.chars().find(|ch| {
            let (_, _, had_errors) = self.0.encode(ch.encode_utf8(&mut scratch));
            had_errors
        });

        let reason = match offending {
            Some(ch) => format!("character {ch:?} (U+{:04X}) is not representable", u32::from(ch)),
            None => "input is not representable".to_owned(),
        };
        Md5Error::Encoding {
            encoding: self.name(),
            reason,
        }
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::UTF_8
    }
}

impl FromStr for TextEncoding {
    type Err = Md5Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_label(s)
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
