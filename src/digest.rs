//! Digest value type and output options

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::crypto::encode::{encode_hex, state_to_bytes};
use crate::error::{DigestError, Result};
use crate::{DIGEST_LENGTH, HEX_DIGEST_LENGTH};

/// Letter case for hex output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexCase {
    /// `0-9a-f`, the form sent over the wire
    #[default]
    Lower,
    /// `0-9A-F`
    Upper,
}

/// A 128-bit MD5 digest
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LENGTH]);

impl Digest {
    /// Build a digest from the four final registers (A, B, C, D)
    pub fn from_state(state: [u32; 4]) -> Self {
        Digest(state_to_bytes(state))
    }

    /// Wrap raw digest bytes
    pub fn from_bytes(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Digest(bytes)
    }

    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8; DIGEST_LENGTH] {
        &self.0
    }

    /// Hex encoding in the requested case (32 characters)
    pub fn to_hex(&self, case: HexCase) -> String {
        encode_hex(&self.0, case)
    }

    /// Lowercase hex encoding, the form sent over the wire
    pub fn to_lower_hex(&self) -> String {
        self.to_hex(HexCase::Lower)
    }

    /// Uppercase hex encoding
    pub fn to_upper_hex(&self) -> String {
        self.to_hex(HexCase::Upper)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_lower_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_lower_hex())
    }
}

impl FromStr for Digest {
    type Err = DigestError;

    /// Parse 32 hex digits, either case
    fn from_str(s: &str) -> Result<Self> {
        let count = s.chars().count();
        if count != HEX_DIGEST_LENGTH {
            return Err(DigestError::InvalidLength(count));
        }

        let mut bytes = [0u8; DIGEST_LENGTH];
        for (position, character) in s.chars().enumerate() {
            let nibble = character
                .to_digit(16)
                .ok_or(DigestError::InvalidHexDigit { position, character })?;
            let shift = if position % 2 == 0 { 4 } else { 0 };
            bytes[position / 2] |= (nibble as u8) << shift;
        }

        Ok(Digest(bytes))
    }
}

impl From<Digest> for [u8; DIGEST_LENGTH] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_lower_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
