//! MD5 digest pipeline
//!
//! This module implements the legacy MD5 routine used to hash credentials,
//! bit-compatible with the digests existing backends expect:
//! padding into 32-bit words, four-round compression, and hex encoding.

pub mod padding;
pub mod compress;
pub mod encode;
mod md5;

pub use md5::{digest, digest_bytes, digest_lower, digest_upper, digest_utf16, verify};

#[cfg(test)]
mod tests;
