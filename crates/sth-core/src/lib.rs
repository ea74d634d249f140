//! `sth-core` — records, configuration, and quantization for `spacetime_hash`.
//!
//! This crate is a dependency of every other `sth-*` crate.  It has no
//! `sth-*` dependencies and no cryptography; everything here is plain
//! deterministic discretization of space and time.
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`geo`]    | `LatLng`, delimited-string coordinate parser               |
//! | [`record`] | `SpacetimeRecord`                                          |
//! | [`config`] | `HashConfig`                                               |
//! | [`time`]   | `quantify_duration`                                        |
//! | [`grid`]   | `QuantizedPoint`, `quantify_lat_lng`, `enumerate_perimeter`|
//! | [`buf`]    | `try_with_capacity`                                        |
//! | [`error`]  | `SthError`, `SthResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `LatLng`,                |
//! |         | `SpacetimeRecord` and `HashConfig`.                        |

pub mod buf;
pub mod config;
pub mod error;
pub mod geo;
pub mod grid;
pub mod record;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use buf::try_with_capacity;
pub use config::HashConfig;
pub use error::{SthError, SthResult};
pub use geo::LatLng;
pub use grid::{QuantizedPoint, enumerate_perimeter, grid_step, quantify_lat_lng};
pub use record::SpacetimeRecord;
pub use time::quantify_duration;
