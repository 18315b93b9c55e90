//! Message padding
//!
//! Turns the message bytes into little-endian 32-bit words and appends the
//! standard MD5 padding:
//! 1. A single `0x80` byte right after the message
//! 2. Zero words up to 14 words short of a block boundary
//! 3. The message length in bits as a 64-bit value, low word first

use crate::BLOCK_WORDS;

/// Bytes per 512-bit block
const BLOCK_BYTES: usize = BLOCK_WORDS * 4;

/// Bytes taken by the pad byte plus the 64-bit length trailer
const TRAILER_BYTES: usize = 8;

/// Byte view of the input used for hashing.
///
/// Credentials are hashed over their UTF-8 encoding, never over UTF-16 code
/// units, so non-ASCII input expands to several bytes per character.
pub fn utf8_bytes(input: &str) -> &[u8] {
    input.as_bytes()
}

/// Number of 512-bit blocks a message of `byte_len` bytes pads to
pub fn block_count(byte_len: usize) -> usize {
    (byte_len + TRAILER_BYTES) / BLOCK_BYTES + 1
}

/// Build the padded word buffer for a message.
///
/// The result always holds a whole number of 16-word blocks, with the bit
/// length in the last two words.
pub fn pad_message(bytes: &[u8]) -> Vec<u32> {
    let len = bytes.len();
    let mut words = vec![0u32; block_count(len) * BLOCK_WORDS];

    for (i, &byte) in bytes.iter().enumerate() {
        words[i >> 2] |= u32::from(byte) << ((i % 4) * 8);
    }

    words[len >> 2] |= 0x80 << ((len % 4) * 8);

    let last = words.len();
    words[last - 2..].copy_from_slice(&length_trailer(len as u64));

    words
}

/// Message length in bits as two words, low word first.
///
/// The bit count is taken mod 2^64.
pub fn length_trailer(byte_len: u64) -> [u32; 2] {
    let bit_len = byte_len.wrapping_mul(8);
    [bit_len as u32, (bit_len >> 32) as u32]
}
