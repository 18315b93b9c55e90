//! Error types for credential digests
//!
//! Computing a digest never fails. These errors come from parsing hex
//! digests and from decoding UTF-16 input.

use thiserror::Error;

/// Main error type for digest operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// Hex digest text is not exactly 32 characters
    #[error("Invalid digest length: expected 32 hex characters, got {0}")]
    InvalidLength(usize),

    /// Hex digest text contains a non-hex character
    #[error("Invalid hex digit {character:?} at position {position}")]
    InvalidHexDigit {
        /// Character offset of the offending digit
        position: usize,
        /// The offending character
        character: char,
    },

    /// UTF-16 input contains an unpaired surrogate
    #[error("Invalid UTF-16 input: {0}")]
    InvalidUtf16(String),
}

impl From<std::string::FromUtf16Error> for DigestError {
    fn from(err: std::string::FromUtf16Error) -> Self {
        DigestError::InvalidUtf16(err.to_string())
    }
}

/// Result type alias for digest operations
pub type Result<T> = std::result::Result<T, DigestError>;
