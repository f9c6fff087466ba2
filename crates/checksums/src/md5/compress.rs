use super::block::Block;
use super::state::State;
use super::tables::{K, MESSAGE_INDEX, ROUNDS, SHIFTS};
use crate::bitops::add32;

#[inline(always)]
const fn f(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (!b & d)
}

#[inline(always)]
const fn g(b: u32, c: u32, d: u32) -> u32 {
    (d & b) | (!d & c)
}

#[inline(always)]
const fn h(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline(always)]
const fn i(b: u32, c: u32, d: u32) -> u32 {
    c ^ (b | !d)
}

/// Folds one block into the chaining value.
///
/// Pure function of `(state, block)`. Blocks must be applied in message
/// order; compression is neither commutative nor associative across blocks.
#[must_use]
pub fn compress(state: State, block: &Block) -> State {
    let m = block.words();
    let [mut a, mut b, mut c, mut d] = state.words();

    for round in 0..ROUNDS {
        let mixed = match round / 16 {
            0 => f(b, c, d),
            1 => g(b, c, d),
            2 => h(b, c, d),
            _ => i(b, c, d),
        };
        let sum = add32([a, mixed, K[round], m[MESSAGE_INDEX[round]]]);
        let rotated = add32([b, SHIFTS[round].apply(sum)]);

        a = d;
        d = c;
        c = b;
        b = rotated;
    }

    State {
        a: add32([state.a, a]),
        b: add32([state.b, b]),
        c: add32([state.c, c]),
        d: add32([state.d, d]),
    }
}
