//! Hash configuration.
//!
//! There is no process-wide default: every hashing call receives a
//! `HashConfig` value.  Two parties only produce comparable tokens when all
//! four fields agree.

use std::fmt;

use crate::grid::grid_step;
use crate::{SthError, SthResult};

/// Parameters shared by both parties of a comparison.
///
/// Typically loaded from a JSON/TOML file by the application crate (enable
/// the `serde` feature) and handed to the hasher.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HashConfig {
    /// HMAC secret.  Must be non-empty.
    pub key: String,

    /// Width of one time bucket in minutes.  Must be non-zero.
    pub time_step_minutes: u32,

    /// Decimal exponent of the grid step: `-3` keeps three digits after the
    /// decimal point (step `0.001°`), `1` truncates to tens of degrees.
    pub latlng_precision: i32,

    /// Half-width, in grid cells, of the square whose perimeter is hashed.
    pub spread_out: u32,
}

impl HashConfig {
    pub fn new(
        key:               impl Into<String>,
        time_step_minutes: u32,
        latlng_precision:  i32,
        spread_out:        u32,
    ) -> Self {
        Self {
            key: key.into(),
            time_step_minutes,
            latlng_precision,
            spread_out,
        }
    }

    /// Validate every field.  Called by the hasher before any work starts.
    pub fn validate(&self) -> SthResult<()> {
        if self.key.is_empty() {
            return Err(SthError::Configuration("hash key must not be empty".into()));
        }
        if self.time_step_minutes == 0 {
            return Err(SthError::InvalidArgument(
                "time_step_minutes must be positive".into(),
            ));
        }
        grid_step(self.latlng_precision)?;
        Ok(())
    }
}

impl fmt::Debug for HashConfig {
    /// The key is redacted so configs can be logged.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashConfig")
            .field("key", &"<redacted>")
            .field("time_step_minutes", &self.time_step_minutes)
            .field("latlng_precision", &self.latlng_precision)
            .field("spread_out", &self.spread_out)
            .finish()
    }
}
