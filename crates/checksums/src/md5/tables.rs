//! Fixed round tables from RFC 1321.
//!
//! These values are transcribed, not computed: a single wrong entry silently
//! changes every digest, so the tests below check them against the defining
//! formulas and against the RFC test suite.

use crate::bitops::Rotation;

/// Number of compression rounds per block.
pub const ROUNDS: usize = 64;

/// Initial chaining values `A, B, C, D`.
pub const INITIAL_STATE: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

/// Additive round constants, `K[i] = floor(2^32 * |sin(i + 1)|)`.
#[rustfmt::skip]
pub const K: [u32; ROUNDS] = [
    0xd76a_a478, 0xe8c7_b756, 0x2420_70db, 0xc1bd_ceee,
    0xf57c_0faf, 0x4787_c62a, 0xa830_4613, 0xfd46_9501,
    0x6980_98d8, 0x8b44_f7af, 0xffff_5bb1, 0x895c_d7be,
    0x6b90_1122, 0xfd98_7193, 0xa679_438e, 0x49b4_0821,
    0xf61e_2562, 0xc040_b340, 0x265e_5a51, 0xe9b6_c7aa,
    0xd62f_105d, 0x0244_1453, 0xd8a1_e681, 0xe7d3_fbc8,
    0x21e1_cde6, 0xc337_07d6, 0xf4d5_0d87, 0x455a_14ed,
    0xa9e3_e905, 0xfcef_a3f8, 0x676f_02d9, 0x8d2a_4c8a,
    0xfffa_3942, 0x8771_f681, 0x6d9d_6122, 0xfde5_380c,
    0xa4be_ea44, 0x4bde_cfa9, 0xf6bb_4b60, 0xbebf_bc70,
    0x289b_7ec6, 0xeaa1_27fa, 0xd4ef_3085, 0x0488_1d05,
    0xd9d4_d039, 0xe6db_99e5, 0x1fa2_7cf8, 0xc4ac_5665,
    0xf429_2244, 0x432a_ff97, 0xab94_23a7, 0xfc93_a039,
    0x655b_59c3, 0x8f0c_cc92, 0xffef_f47d, 0x8584_5dd1,
    0x6fa8_7e4f, 0xfe2c_e6e0, 0xa301_4314, 0x4e08_11a1,
    0xf753_7e82, 0xbd3a_f235, 0x2ad7_d2bb, 0xeb86_d391,
];

/// Per-family rotation amounts, four entries per round family.
pub const FAMILY_SHIFTS: [[u32; 4]; 4] = [
    [7, 12, 17, 22],
    [5, 9, 14, 20],
    [4, 11, 16, 23],
    [6, 10, 15, 21],
];

/// Left-rotation amount for each of the 64 rounds.
pub const SHIFTS: [Rotation; ROUNDS] = expand_shifts();

/// Message-word index for each of the 64 rounds.
pub const MESSAGE_INDEX: [usize; ROUNDS] = expand_message_index();

/// Message-word index used by `round`.
///
/// - rounds 0..16: `i`
/// - rounds 16..32: `(5i + 1) mod 16`
/// - rounds 32..48: `(3i + 5) mod 16`
/// - rounds 48..64: `7i mod 16`
#[must_use]
pub const fn message_index(round: usize) -> usize {
    match round / 16 {
        0 => round % 16,
        1 => (5 * round + 1) % 16,
        2 => (3 * round + 5) % 16,
        _ => (7 * round) % 16,
    }
}

const fn expand_shifts() -> [Rotation; ROUNDS] {
    let mut table = [Rotation::new(0); ROUNDS];
    let mut round = 0;
    while round < ROUNDS {
        table[round] = Rotation::new(FAMILY_SHIFTS[round / 16][round % 4]);
        round += 1;
    }
    table
}

const fn expand_message_index() -> [usize; ROUNDS] {
    let mut table = [0; ROUNDS];
    let mut round = 0;
    while round < ROUNDS {
        table[round] = message_index(round);
        round += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_constants_match_sine_definition() {
        for (i, &k) in K.iter().enumerate() {
            let expected = ((i as f64 + 1.0).sin().abs() * 4_294_967_296.0).floor() as u32;
            assert_eq!(k, expected, "K[{i}] mismatch");
        }
    }

    #[test]
    fn shifts_follow_family_pattern() {
        #[rustfmt::skip]
        let expected: [u32; ROUNDS] = [
            7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22,
            5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20,
            4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23,
            6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
        ];
        let actual: Vec<u32> = SHIFTS.iter().map(|s| s.bits()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn each_family_visits_every_message_word_once() {
        for family in 0..4 {
            let mut seen = [false; 16];
            for round in family * 16..(family + 1) * 16 {
                let g = MESSAGE_INDEX[round];
                assert!(!seen[g], "word {g} used twice in family {family}");
                seen[g] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn message_index_spot_checks() {
        assert_eq!(message_index(0), 0);
        assert_eq!(message_index(15), 15);
        assert_eq!(message_index(16), 1);
        assert_eq!(message_index(17), 6);
        assert_eq!(message_index(32), 5);
        assert_eq!(message_index(33), 8);
        assert_eq!(message_index(48), 0);
        assert_eq!(message_index(49), 7);
        assert_eq!(message_index(63), 9);
    }

    #[test]
    fn initial_state_is_counting_pattern() {
        let bytes: Vec<u8> = INITIAL_STATE
            .iter()
            .flat_map(|word| word.to_le_bytes())
            .collect();
        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef,
            0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54, 0x32, 0x10,
        ];
        assert_eq!(bytes, expected);
    }
}
