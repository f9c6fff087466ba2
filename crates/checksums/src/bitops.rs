//! Fixed-width 32-bit arithmetic used by the compression rounds.
//!
//! All arithmetic is over ℤ/2³²ℤ: additions wrap and never saturate or
//! report overflow.

use crate::Md5Error;

/// Number of bits in a word.
pub const WORD_BITS: u32 = u32::BITS;

/// Sums any number of words with modulo-2³² wraparound.
///
/// # Examples
///
/// ```
/// use checksums::bitops::add32;
///
/// assert_eq!(add32([u32::MAX, 1]), 0);
/// assert_eq!(add32([1, 2, 3, 4]), 10);
/// assert_eq!(add32([]), 0);
/// ```
#[inline(always)]
#[must_use]
pub const fn add32<const N: usize>(operands: [u32; N]) -> u32 {
    let mut sum = 0u32;
    let mut i = 0;
    while i < N {
        sum = sum.wrapping_add(operands[i]);
        i += 1;
    }
    sum
}

/// Rotates `x` left by `n` bits.
///
/// Fails with [`Md5Error::InvalidArgument`] unless `0 <= n < 32`.
///
/// ```
/// use checksums::bitops::rotl32;
///
/// assert_eq!(rotl32(0x8000_0001, 1).unwrap(), 0x0000_0003);
/// assert!(rotl32(1, 32).is_err());
/// ```
pub fn rotl32(x: u32, n: u32) -> Result<u32, Md5Error> {
    Ok(Rotation::try_from(n)?.apply(x))
}

/// A left-rotation amount already validated to lie in `0..32`.
///
/// Callers outside this crate obtain one through [`TryFrom<u32>`]. The
/// round table uses a crate-private const constructor, so an out-of-range
/// table entry fails the build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation(u32);

impl Rotation {
    /// Const constructor for the round table; `bits >= 32` fails const
    /// evaluation.
    #[must_use]
    pub(crate) const fn new(bits: u32) -> Self {
        assert!(bits < WORD_BITS, "rotation amount must be below 32");
        Self(bits)
    }

    /// The rotation amount in bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Applies the rotation to `x`.
    #[inline(always)]
    #[must_use]
    pub const fn apply(self, x: u32) -> u32 {
        x.rotate_left(self.0)
    }
}

impl TryFrom<u32> for Rotation {
    type Error = Md5Error;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        if bits < WORD_BITS {
            Ok(Self(bits))
        } else {
            Err(Md5Error::invalid_argument("rotation", u64::from(bits)))
        }
    }
}
