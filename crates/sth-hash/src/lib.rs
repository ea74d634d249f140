//! `sth-hash` — keyed spacetime tokens.
//!
//! # Pipeline
//!
//! ```text
//! SpacetimeRecord ─┬─ quantify_duration ──► [t₀, t₁, …]
//!                  └─ quantify_lat_lng ──► center ─► enumerate_perimeter ─► [p₀, p₁, …]
//!
//! for t in timestamps:
//!   for p in perimeter:
//!     token = HMAC-SHA256(key, dec(t) ++ dec(p.lat) ++ dec(p.lng))[..8]
//! ```
//!
//! Two parties that hash with the same [`HashConfig`] and share a token were
//! (with overwhelming probability) in a common grid cell during a common
//! time bucket.  Deciding what to do with that is the caller's business.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Computes the HMACs on Rayon's thread pool.             |
//! | `serde`    | `HashToken` (de)serializes as its hex string.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sth_hash::{HashConfig, SpacetimeHasher, SpacetimeRecord};
//!
//! let hasher = SpacetimeHasher::new(HashConfig::new(key, 10, -3, 1))?;
//! let tokens = hasher.hash(&SpacetimeRecord { begin, end, lat, lng })?;
//! ```

pub mod keyed;
pub mod number;
pub mod spacetime;
pub mod token;


pub use keyed::KeyedHasher;
pub use number::js_number;
pub use spacetime::{SpacetimeHasher, hash_spacetime};
pub use token::{HashToken, TOKEN_BYTES};

pub use sth_core::{HashConfig, LatLng, SpacetimeRecord, SthError, SthResult};
