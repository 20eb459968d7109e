//! The 16-byte digest value and its hex text form

use crate::error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Size of an MD5 digest in bytes
pub const DIGEST_LENGTH: usize = 16;

/// An immutable MD5 digest.
///
/// Formats as 32 lowercase hex characters with `{}` or `{:x}`, uppercase
/// with `{:X}`, and serializes as the lowercase hex string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_LENGTH]);

impl Digest {
    /// Wrap raw digest bytes
    pub const fn from_bytes(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Parse 32 hex characters (either case) into a digest
    pub fn from_hex(text: &str) -> Result<Self, ValidationError> {
        if text.len() != DIGEST_LENGTH * 2 {
            return Err(ValidationError::invalid_digest_hex(
                text,
                &format!(
                    "expected {} hex characters, got {}",
                    DIGEST_LENGTH * 2,
                    text.len()
                ),
            ));
        }

        let mut bytes = [0u8; DIGEST_LENGTH];
        hex::decode_to_slice(text, &mut bytes)
            .map_err(|e| ValidationError::invalid_digest_hex(text, &e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8; DIGEST_LENGTH] {
        &self.0
    }

    /// Lowercase hex encoding, two characters per byte, high nibble first
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Uppercase hex encoding
    pub fn to_hex_upper(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Compare two digests, always inspecting all 16 bytes
    pub fn ct_eq(&self, other: &Digest) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

/// Render a digest as 32 lowercase hex characters
pub fn digest_to_hex(digest: &Digest) -> String {
    digest.to_hex()
}

impl From<[u8; DIGEST_LENGTH]> for Digest {
    fn from(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LENGTH] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}
