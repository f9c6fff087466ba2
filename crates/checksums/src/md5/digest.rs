//! Digest serialisation and hex presentation.

use std::fmt;
use std::str::FromStr;

use super::state::State;

/// Number of bytes in an MD5 digest.
pub const DIGEST_LEN: usize = 16;

/// Number of characters in the hex form of a digest.
pub const HEX_LEN: usize = DIGEST_LEN * 2;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// A finished 128-bit MD5 digest.
///
/// The byte order is A, B, C, D each in little-endian order. Hex rendering
/// walks those bytes in order, high nibble first, so the familiar
/// `d41d8cd9...` form falls out without any further reversal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Finalises a chaining value into digest bytes.
    #[must_use]
    pub fn from_state(state: State) -> Self {
        Self(state.to_le_bytes())
    }

    /// Wraps raw digest bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrow the digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Consume the digest, returning its bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Renders the 32-character lowercase hex form.
    ///
    /// ```
    /// use checksums::md5::Md5;
    ///
    /// assert_eq!(Md5::digest(b"").to_hex(), "d41d8cd98f00b204e9800998ecf8427e");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(HEX_LEN);
        for byte in self.0 {
            out.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
            out.push(char::from(HEX_DIGITS[usize::from(byte & 0x0f)]));
        }
        out
    }

    /// Parses a 32-character hex string (either case).
    pub fn from_hex(text: &str) -> Result<Self, ParseDigestError> {
        let raw = text.as_bytes();
        if raw.len() != HEX_LEN {
            return Err(ParseDigestError::InvalidLength { len: raw.len() });
        }

        let mut bytes = [0u8; DIGEST_LEN];
        for (index, pair) in raw.chunks_exact(2).enumerate() {
            let high = nibble(pair[0], index * 2, text)?;
            let low = nibble(pair[1], index * 2 + 1, text)?;
            bytes[index] = (high << 4) | low;
        }
        Ok(Self(bytes))
    }
}

fn nibble(digit: u8, position: usize, text: &str) -> Result<u8, ParseDigestError> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(ParseDigestError::InvalidDigit {
            position,
            found: text
                .get(position..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        }),
    }
}

/// Error returned when a hex string is not a valid MD5 digest.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseDigestError {
    /// The input does not contain exactly 32 hex digits.
    #[error("MD5 digest requires {HEX_LEN} hex digits, received {len}")]
    InvalidLength {
        /// Length of the rejected input in bytes.
        len: usize,
    },
    /// A character outside `[0-9a-fA-F]` was found.
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        position: usize,
        /// The offending character.
        found: char,
    },
}

impl FromStr for Digest {
    type Err = ParseDigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl From<State> for Digest {
    fn from(state: State) -> Self {
        Self::from_state(state)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<[u8; DIGEST_LEN]> for Digest {
    fn eq(&self, other: &[u8; DIGEST_LEN]) -> bool {
        &self.0 == other
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EMPTY_HEX: &str = "d41d8cd98f00b204e9800998ecf8427e";

    #[test]
    fn hex_is_lowercase_high_nibble_first() {
        let digest = Digest::from_bytes([
            0x0f, 0xa0, 0x00, 0xff, 0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0, 0x01, 0x10,
            0x80, 0x08,
        ]);
        assert_eq!(digest.to_hex(), "0fa000ff123456789abcdef001108008");
        assert_eq!(digest.to_string(), digest.to_hex());
        assert_eq!(format!("{digest:X}"), "0FA000FF123456789ABCDEF001108008");
    }

    #[test]
    fn from_state_uses_little_endian_words() {
        let state = State::from_words([0xd98c_1dd4, 0x04b2_008f, 0x9809_80e9, 0x7e42_f8ec]);
        assert_eq!(Digest::from_state(state).to_hex(), EMPTY_HEX);
    }

    #[test]
    fn parse_accepts_either_case() {
        let lower: Digest = EMPTY_HEX.parse().unwrap();
        let upper: Digest = EMPTY_HEX.to_uppercase().parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.to_hex(), EMPTY_HEX);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            Digest::from_hex("abcd"),
            Err(ParseDigestError::InvalidLength { len: 4 })
        );
        assert_eq!(
            Digest::from_hex(""),
            Err(ParseDigestError::InvalidLength { len: 0 })
        );
    }

    #[test]
    fn parse_rejects_non_hex_digits() {
        let mut text = EMPTY_HEX.to_string();
        text.replace_range(5..6, "g");
        assert_eq!(
            Digest::from_hex(&text),
            Err(ParseDigestError::InvalidDigit {
                position: 5,
                found: 'g'
            })
        );
    }

    #[test]
    fn debug_includes_hex() {
        let digest: Digest = EMPTY_HEX.parse().unwrap();
        assert_eq!(format!("{digest:?}"), format!("Digest({EMPTY_HEX})"));
    }

    proptest! {
        #[test]
        fn hex_round_trips(bytes in any::<[u8; DIGEST_LEN]>()) {
            let digest = Digest::from_bytes(bytes);
            let hex = digest.to_hex();
            prop_assert_eq!(hex.len(), HEX_LEN);
            prop_assert_eq!(Digest::from_hex(&hex), Ok(digest));
        }
    }
}
