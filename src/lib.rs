//! # Credential Digest
//!
//! The MD5 routine used by the admin and mobile clients to hash credentials
//! before they are encrypted for transport.
//!
//! MD5 is cryptographically broken. This crate reproduces it bit for bit
//! only so that digests stay compatible with existing backends.
//!
//! ## Features
//!
//! - Lowercase and uppercase hex digests of UTF-8 strings
//! - Typed [`Digest`] values with parsing and serde support
//! - UTF-16 input with strict surrogate handling
//! - Pure functions with no shared state, safe to call from any thread
//!
//! ## Example
//!
//! ```
//! use credential_digest::{digest_lower, digest_upper};
//!
//! let hash = digest_lower("message digest");
//! assert_eq!(hash, "f96b697d7cb7938d525a2f31aaf161d0");
//! assert_eq!(digest_upper("message digest"), hash.to_uppercase());
//! ```

pub mod crypto;
pub mod digest;
pub mod error;

// Re-export main types
pub use error::{DigestError, Result};
pub use digest::{Digest, HexCase};
pub use crypto::{digest, digest_bytes, digest_lower, digest_upper, digest_utf16, verify};

/// Digest length in bytes
pub const DIGEST_LENGTH: usize = 16;

/// Hex digest length in characters
pub const HEX_DIGEST_LENGTH: usize = 32;

/// Words per 512-bit block
pub const BLOCK_WORDS: usize = 16;
