//! The 64-bit hash token.

use std::fmt;
use std::str::FromStr;

use sth_core::SthError;

/// Number of HMAC output bytes kept per token.
pub const TOKEN_BYTES: usize = 8;

/// A truncated keyed hash of one quantized `(timestamp, lat, lng)` sample.
///
/// Displays as 16 lowercase hex characters, the interchange form.  Tokens
/// are `Copy + Ord + Hash` so callers can collect them into whatever set
/// type their matching step needs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashToken(pub [u8; TOKEN_BYTES]);

impl HashToken {
    /// Keep the first [`TOKEN_BYTES`] bytes of a full digest.
    #[inline]
    pub(crate) fn from_digest(digest: &[u8]) -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        bytes.copy_from_slice(&digest[..TOKEN_BYTES]);
        Self(bytes)
    }

    #[inline]
    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for HashToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for HashToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashToken({})", self.to_hex())
    }
}

impl FromStr for HashToken {
    type Err = SthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; TOKEN_BYTES];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| SthError::Parse(format!("invalid hash token {s:?}: {e}")))?;
        Ok(Self(bytes))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HashToken {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HashToken {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
