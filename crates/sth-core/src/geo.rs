//! Geographic coordinate value type and its text parser.
//!
//! `LatLng` uses `f64` latitude/longitude.  Single precision would change the
//! decimal expansion of quantized coordinates and therefore every token, so
//! unlike a simulation-grade point type there is no room for `f32` here.
//!
//! Coordinates arrive in one of two shapes:
//!
//! - paired numeric fields — [`LatLng::new`] or `From<(f64, f64)>`
//! - a single delimited string — `"25.03,121.56"`, `"25.03; 121.56"` or
//!   `"25.03 121.56"` via [`str::parse`]

use std::fmt;
use std::str::FromStr;

use crate::{SthError, SthResult};

/// A WGS-84 coordinate pair in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `true` when both components are finite (neither NaN nor ±∞).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Reject non-finite components with [`SthError::InvalidArgument`].
    ///
    /// Range is not checked; out-of-range values still quantize
    /// deterministically.
    pub fn validate(self) -> SthResult<()> {
        if self.is_finite() {
            return Ok(());
        }
        log::warn!("rejecting non-finite coordinate {self}");
        Err(SthError::InvalidArgument(format!(
            "latitude/longitude must be finite, got ({}, {})",
            self.lat, self.lng
        )))
    }
}

impl From<(f64, f64)> for LatLng {
    #[inline]
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl FromStr for LatLng {
    type Err = SthError;

    /// Parse `"<lat><sep><lng>"` where `<sep>` is `,`, `;` or whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|p| !p.is_empty());

        let (Some(lat), Some(lng), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(SthError::Parse(format!(
                "invalid coordinate {s:?}: expected \"<lat>,<lng>\""
            )));
        };

        Ok(Self {
            lat: parse_degrees(lat, "latitude")?,
            lng: parse_degrees(lng, "longitude")?,
        })
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

fn parse_degrees(s: &str, what: &str) -> SthResult<f64> {
    s.parse::<f64>()
        .map_err(|e| SthError::Parse(format!("invalid {what} {s:?}: {e}")))
}
