//! MD5 compression function
//!
//! Each 16-word block runs through four rounds of 16 steps. All register
//! arithmetic wraps modulo 2^32. The constant tables are the literals
//! published in RFC 1321.

use crate::BLOCK_WORDS;

/// Initial values of registers A, B, C, D
pub const INITIAL_STATE: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// Additive constants, `floor(2^32 * abs(sin(i + 1)))`
pub const SINE_TABLE: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,

    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,

    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,

    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Left-rotation amount for each step
pub const SHIFTS: [u32; 64] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22,
    5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20,
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23,
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

/// Message word consumed by each step
pub const WORD_ORDER: [usize; 64] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    1, 6, 11, 0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12,
    5, 8, 11, 14, 1, 4, 7, 10, 13, 0, 3, 6, 9, 12, 15, 2,
    0, 7, 14, 5, 12, 3, 10, 1, 8, 15, 6, 13, 4, 11, 2, 9,
];

/// Rounds per block
const ROUNDS: usize = 4;

/// Steps per round
const ROUND_STEPS: usize = 16;

#[inline(always)]
fn step(q: u32, a: u32, b: u32, x: u32, s: u32, t: u32) -> u32 {
    b.wrapping_add(a.wrapping_add(q).wrapping_add(x).wrapping_add(t).rotate_left(s))
}

/// Round 1: `(b & c) | (!b & d)`
#[inline(always)]
pub fn ff(a: u32, b: u32, c: u32, d: u32, x: u32, s: u32, t: u32) -> u32 {
    step((b & c) | (!b & d), a, b, x, s, t)
}

/// Round 2: `(b & d) | (c & !d)`
#[inline(always)]
pub fn gg(a: u32, b: u32, c: u32, d: u32, x: u32, s: u32, t: u32) -> u32 {
    step((b & d) | (c & !d), a, b, x, s, t)
}

/// Round 3: `b ^ c ^ d`
#[inline(always)]
pub fn hh(a: u32, b: u32, c: u32, d: u32, x: u32, s: u32, t: u32) -> u32 {
    step(b ^ c ^ d, a, b, x, s, t)
}

/// Round 4: `c ^ (b | !d)`
#[inline(always)]
pub fn ii(a: u32, b: u32, c: u32, d: u32, x: u32, s: u32, t: u32) -> u32 {
    step(c ^ (b | !d), a, b, x, s, t)
}

/// Run one block through all 64 steps and chain the result into `state`
pub fn compress_block(state: &mut [u32; 4], block: &[u32]) {
    debug_assert_eq!(block.len(), BLOCK_WORDS);

    let [mut a, mut b, mut c, mut d] = *state;

    for round in 0..ROUNDS {
        for j in 0..ROUND_STEPS {
            let k = round * ROUND_STEPS + j;
            let (x, s, t) = (block[WORD_ORDER[k]], SHIFTS[k], SINE_TABLE[k]);
            let next = match round {
                0 => ff(a, b, c, d, x, s, t),
                1 => gg(a, b, c, d, x, s, t),
                2 => hh(a, b, c, d, x, s, t),
                _ => ii(a, b, c, d, x, s, t),
            };
            (a, b, c, d) = (d, next, b, c);
        }
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

/// Compress a padded word buffer, starting from [`INITIAL_STATE`]
pub fn compress(words: &[u32]) -> [u32; 4] {
    debug_assert_eq!(words.len() % BLOCK_WORDS, 0);

    let mut state = INITIAL_STATE;
    for block in words.chunks_exact(BLOCK_WORDS) {
        compress_block(&mut state, block);
    }
    state
}
