//! Keyed HMAC-SHA256 over a quantized sample.
//!
//! # Message format
//!
//! ```text
//! message = dec(timestamp) ++ dec(lat) ++ dec(lng)      (no separators)
//! token   = HMAC-SHA256(key, message)[..8]
//! ```
//!
//! `(123, 25.123, 122.123)` hashes the 16 bytes `12325.123122.123`.  With no
//! separator some distinct triples share a message (`(1, 23.5, 1)` and
//! `(12, 3.5, 1)` both give `123.51`).  Changing it would invalidate every
//! token set already exchanged, so the format is frozen.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use sth_core::{SthError, SthResult};

use crate::number::push_js_number;
use crate::token::HashToken;

type HmacSha256 = Hmac<Sha256>;

/// An HMAC instance pre-keyed with the shared secret.
///
/// The keyed state is cloned per message.
#[derive(Clone)]
pub struct KeyedHasher {
    mac: HmacSha256,
}

impl KeyedHasher {
    /// Key a new hasher.
    ///
    /// # Errors
    /// [`SthError::Configuration`] if `key` is empty.
    pub fn new(key: &str) -> SthResult<Self> {
        if key.is_empty() {
            return Err(SthError::Configuration("hash key must not be empty".into()));
        }
        let mac = HmacSha256::new_from_slice(key.as_bytes())
            .map_err(|e| SthError::Configuration(format!("unusable hash key: {e}")))?;
        Ok(Self { mac })
    }

    /// Token for one `(timestamp, lat, lng)` sample.
    pub fn hash(&self, timestamp: i64, lat: f64, lng: f64) -> HashToken {
        let message = message(timestamp, lat, lng);
        let mut mac = self.mac.clone();
        mac.update(message.as_bytes());
        HashToken::from_digest(&mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for KeyedHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("KeyedHasher { .. }")
    }
}

/// The exact bytes fed to the MAC for one sample.
pub fn message(timestamp: i64, lat: f64, lng: f64) -> String {
    let mut out = String::with_capacity(48);
    out.push_str(&timestamp.to_string());
    push_js_number(&mut out, lat);
    push_js_number(&mut out, lng);
    out
}
