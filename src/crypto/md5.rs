//! MD5 digests of credentials
//!
//! Login and registration flows hash the password client-side and send the
//! lowercase hex digest onward for transport encryption. The output has to
//! match the legacy backend bit for bit, including for non-ASCII input,
//! which is always hashed over its UTF-8 bytes.

use tracing::trace;

use super::compress::compress;
use super::padding::{block_count, pad_message, utf8_bytes};
use crate::digest::Digest;
use crate::error::Result;

/// Compute the MD5 digest of raw bytes
pub fn digest_bytes(bytes: &[u8]) -> Digest {
    trace!(byte_len = bytes.len(), blocks = block_count(bytes.len()), "computing md5 digest");

    let words = pad_message(bytes);
    Digest::from_state(compress(&words))
}

/// Compute the MD5 digest of a string's UTF-8 encoding
pub fn digest(input: &str) -> Digest {
    digest_bytes(utf8_bytes(input))
}

/// Calculate MD5 hash of input string and return as lowercase hex string (32 chars)
///
/// # Example
///
/// ```
/// use credential_digest::digest_lower;
///
/// assert_eq!(digest_lower("abc"), "900150983cd24fb0d6963f7d28e17f72");
/// ```
pub fn digest_lower(input: &str) -> String {
    digest(input).to_lower_hex()
}

/// Same as [`digest_lower`] with `A-F` in place of `a-f`
pub fn digest_upper(input: &str) -> String {
    digest_lower(input).to_ascii_uppercase()
}

/// Compute the digest of UTF-16 text.
///
/// The text is transcoded to UTF-8 first, so the result equals [`digest`]
/// of the same string. Unpaired surrogates have no UTF-8 form and are
/// rejected.
pub fn digest_utf16(units: &[u16]) -> Result<Digest> {
    let text = String::from_utf16(units)?;
    Ok(digest(&text))
}

/// Check `input` against an expected hex digest (either case)
///
/// Returns `Ok(false)` on mismatch and an error when `expected_hex` is not a
/// well-formed digest.
///
/// The comparison is a plain `==` and is not constant-time. Do not use this
/// where an attacker can time repeated checks against a secret digest.
pub fn verify(input: &str, expected_hex: &str) -> Result<bool> {
    let expected: Digest = expected_hex.parse()?;
    Ok(digest(input) == expected)
}
