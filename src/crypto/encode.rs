//! Digest serialization
//!
//! Registers are written A, B, C, D, each as four little-endian bytes, and
//! each byte as two hex digits.

use crate::digest::HexCase;
use crate::DIGEST_LENGTH;

/// Serialize the final registers into digest bytes
pub fn state_to_bytes(state: [u32; 4]) -> [u8; DIGEST_LENGTH] {
    let mut bytes = [0u8; DIGEST_LENGTH];
    for (chunk, word) in bytes.chunks_exact_mut(4).zip(state) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    bytes
}

/// Encode digest bytes as a hex string in the requested case
pub fn encode_hex(bytes: &[u8], case: HexCase) -> String {
    let lower: String = bytes.iter()
        .map(|b| format!("{:02x}", b))
        .collect();

    match case {
        HexCase::Lower => lower,
        HexCase::Upper => lower.to_ascii_uppercase(),
    }
}
